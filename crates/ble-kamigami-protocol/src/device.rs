//! GATT constants and advertising data for the Kamigami robot
//!
//! The robot exposes one primary service with a write characteristic for
//! command frames and a notify characteristic for telemetry. Telemetry
//! decode is out of scope for this crate; the notify UUID is published so a
//! transport can subscribe.

/// Primary command service.
pub const MAIN_SERVICE_UUID: &str = "708a96f0-f200-4e2f-96f0-9bc43c3a31c8";
/// Characteristic accepting encoded command frames.
pub const WRITE_CHARACTERISTIC_UUID: &str = "708a96f1-f200-4e2f-96f0-9bc43c3a31c8";
/// Characteristic carrying inbound telemetry notifications.
pub const NOTIFY_CHARACTERISTIC_UUID: &str = "708a96f2-f200-4e2f-96f0-9bc43c3a31c8";

/// Name the robot advertises during scan; used to pick it out of a crowd.
pub const ADVERTISED_NAME: &str = "KRB0001";

/// IMU telemetry notification rate (per second).
pub const IMU_NOTIFY_PER_SECOND: u32 = 20;
/// Light sensor notification rate (per second).
pub const LUX_NOTIFY_PER_SECOND: u32 = 10;
/// Motor settings notification rate (per second); 0 disables.
pub const MOTOR_SETTINGS_NOTIFY_PER_SECOND: u32 = 0;
