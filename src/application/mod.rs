// Application layer - Use cases over the domain and its ports
pub mod ports;
pub mod robot_service;
pub mod weather_service;
