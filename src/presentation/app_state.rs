// Application state for HTTP handlers
use crate::application::robot_service::RobotControlService;
use crate::application::weather_service::WeatherService;

#[derive(Clone)]
pub struct AppState {
    pub weather_service: WeatherService,
    pub robot_service: RobotControlService,
}
