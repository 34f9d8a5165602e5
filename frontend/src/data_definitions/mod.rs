pub mod route_param;
