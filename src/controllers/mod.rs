pub mod home_controller;
pub mod alerts_controller;
pub mod mandi_controller;
pub mod realtime_controller;
pub mod credit_controller;
pub mod loans_controller;
pub mod calendar_controller;
