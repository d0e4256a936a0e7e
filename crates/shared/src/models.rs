use serde::{Deserialize, Serialize};

/// Enumerated wire value: the parser service sends every enum-like field
/// (belligerents, unit types, weather, priorities, ...) as an object with
/// a machine name and a human caption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
    pub verbose_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.verbose_name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pos2 {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pos3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Top-level response of the parser service for a successfully parsed
/// mission file. The schema is owned by the service; unknown fields are
/// ignored and optional detail fields must not fail deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    pub file_name: String,
    pub data: MissionData,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MissionData {
    #[serde(default)]
    pub location_loader: Option<String>,
    #[serde(default)]
    pub conditions: Conditions,
    #[serde(default)]
    pub player: Option<Player>,
    #[serde(default)]
    pub objects: MissionObjects,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Conditions {
    #[serde(default)]
    pub time_info: Option<TimeInfo>,
    #[serde(default)]
    pub meteorology: Option<Meteorology>,
    #[serde(default)]
    pub communication: Option<Communication>,
    #[serde(default)]
    pub scouting: Option<Scouting>,
    #[serde(default)]
    pub respawn_time: Option<RespawnTime>,
    #[serde(default)]
    pub radar: Option<Radar>,
    // Wire key carries a service-side typo; it is part of the contract.
    #[serde(default, rename = "crater_visibility_muptipliers")]
    pub crater_visibility_multipliers: Option<CraterVisibilityMultipliers>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeInfo {
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub is_fixed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meteorology {
    pub weather: Label,
    pub gust: Label,
    pub turbulence: Label,
    #[serde(default)]
    pub cloud_base: Option<f64>,
    #[serde(default)]
    pub wind: Option<Wind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    pub direction: f64,
    pub speed: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Communication {
    #[serde(default)]
    pub tower_communication: bool,
    #[serde(default)]
    pub vectoring: bool,
    #[serde(default)]
    pub ai_radio_silence: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scouting {
    #[serde(default)]
    pub ships_affect_radar: bool,
    #[serde(default)]
    pub scouts_affect_radar: bool,
    #[serde(default)]
    pub only_scouts_complete_targets: bool,
    #[serde(default)]
    pub scouts: Option<Vec<BelligerentScouts>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BelligerentScouts {
    pub belligerent: Label,
    #[serde(default)]
    pub aircrafts: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RespawnTime {
    pub ships: ShipRespawn,
    pub balloons: u32,
    pub artillery: u32,
    pub searchlights: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShipRespawn {
    pub big: u32,
    pub small: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Radar {
    #[serde(default)]
    pub advanced_mode: bool,
    #[serde(default)]
    pub refresh_interval: Option<u32>,
    #[serde(default)]
    pub ships: Option<ShipRadar>,
    #[serde(default)]
    pub scouts: Option<ScoutRadar>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipRadar {
    #[serde(default)]
    pub treat_as_radar: bool,
    pub big: RadarBand,
    pub small: RadarBand,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadarBand {
    pub max_range: u32,
    pub min_height: u32,
    pub max_height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoutRadar {
    #[serde(default)]
    pub treat_as_radar: bool,
    pub max_range: u32,
    pub max_height: u32,
    pub alpha: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CraterVisibilityMultipliers {
    pub le_100kg: f64,
    pub le_1000kg: f64,
    pub gt_1000kg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    #[serde(default)]
    pub belligerent: Option<Label>,
    #[serde(default)]
    pub flight_id: Option<String>,
    #[serde(default)]
    pub aircraft_index: Option<u32>,
    #[serde(default)]
    pub fixed_weapons: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MissionObjects {
    #[serde(default)]
    pub flights: Vec<Flight>,
    #[serde(default)]
    pub moving_units: Vec<MovingUnit>,
    #[serde(default)]
    pub stationary: Vec<StationaryObject>,
    #[serde(default)]
    pub buildings: Vec<Building>,
    #[serde(default)]
    pub rockets: Vec<Rocket>,
    #[serde(default)]
    pub targets: Vec<Target>,
    #[serde(default)]
    pub markers: Vec<FrontMarker>,
    #[serde(default)]
    pub home_bases: Vec<HomeBase>,
    #[serde(default)]
    pub cameras: Vec<Camera>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    pub id: String,
    #[serde(default)]
    pub air_force: Option<Label>,
    #[serde(default)]
    pub regiment: Option<String>,
    #[serde(default)]
    pub squadron_index: Option<u32>,
    #[serde(default)]
    pub flight_index: Option<u32>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default)]
    pub fuel: Option<u32>,
    #[serde(default)]
    pub weapons: Option<String>,
    #[serde(default)]
    pub ai_only: Option<bool>,
    #[serde(default)]
    pub with_parachutes: Option<bool>,
    #[serde(default)]
    pub route: Vec<RoutePoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePoint {
    #[serde(rename = "type")]
    pub kind: Label,
    pub pos: Pos3,
    #[serde(default)]
    pub speed: Option<f64>,
    #[serde(default)]
    pub formation: Option<Label>,
    #[serde(default)]
    pub radio_silence: bool,
    #[serde(default)]
    pub delay: Option<u32>,
    #[serde(default)]
    pub spacing: Option<u32>,
    #[serde(default)]
    pub patrol_cycles: Option<u32>,
    #[serde(default)]
    pub patrol_timeout: Option<u32>,
    #[serde(default)]
    pub pattern_angle: Option<f64>,
    #[serde(default)]
    pub pattern_side_size: Option<f64>,
    #[serde(default)]
    pub pattern_altitude_difference: Option<f64>,
    #[serde(default)]
    pub target_id: Option<String>,
    #[serde(default)]
    pub target_route_point: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovingUnit {
    pub id: String,
    pub code: String,
    #[serde(default, rename = "type")]
    pub unit_type: Option<Label>,
    pub belligerent: Label,
    #[serde(default)]
    pub waiting_time: Option<u32>,
    #[serde(default)]
    pub skill: Option<Label>,
    #[serde(default)]
    pub recharge_time: Option<f64>,
    #[serde(default)]
    pub route: Vec<UnitRoutePoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitRoutePoint {
    pub pos: Pos2,
    #[serde(default)]
    pub is_check_point: bool,
    #[serde(default)]
    pub waiting_time: Option<u32>,
    #[serde(default)]
    pub section_length: Option<u32>,
    #[serde(default)]
    pub speed: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationaryObject {
    pub id: String,
    pub code: String,
    #[serde(default, rename = "type")]
    pub object_type: Option<Label>,
    pub belligerent: Label,
    pub pos: Pos2,
    #[serde(default)]
    pub rotation_angle: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub id: String,
    pub code: String,
    pub belligerent: Label,
    pub pos: Pos2,
    #[serde(default)]
    pub rotation_angle: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rocket {
    pub id: String,
    pub code: String,
    pub belligerent: Label,
    pub pos: Pos2,
    #[serde(default)]
    pub rotation_angle: Option<f64>,
    #[serde(default)]
    pub delay: Option<f64>,
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default)]
    pub period: Option<f64>,
    #[serde(default)]
    pub destination: Option<Pos2>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    #[serde(rename = "type")]
    pub target_type: Label,
    pub priority: Label,
    #[serde(default)]
    pub in_sleep_mode: bool,
    #[serde(default)]
    pub delay: Option<u32>,
    #[serde(default)]
    pub radius: Option<u32>,
    #[serde(default)]
    pub destruction_level: Option<u32>,
    #[serde(default)]
    pub requires_landing: Option<bool>,
    #[serde(default)]
    pub pos: Option<Pos2>,
    #[serde(default)]
    pub object: Option<TargetObject>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetObject {
    pub id: String,
    #[serde(default)]
    pub waypoint: Option<u32>,
    #[serde(default)]
    pub pos: Option<Pos2>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrontMarker {
    #[serde(default)]
    pub code: Option<String>,
    pub belligerent: Label,
    pub pos: Pos2,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeBase {
    #[serde(default)]
    pub belligerent: Option<Label>,
    #[serde(default)]
    pub range: Option<u32>,
    #[serde(default)]
    pub pos: Option<Pos2>,
    #[serde(default)]
    pub friction: Option<Friction>,
    #[serde(default)]
    pub radar: Option<HomeBaseRadar>,
    #[serde(default)]
    pub spawning: Option<Spawning>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Friction {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HomeBaseRadar {
    #[serde(default)]
    pub range: Option<u32>,
    #[serde(default)]
    pub min_height: Option<u32>,
    #[serde(default)]
    pub max_height: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spawning {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub with_parachutes: bool,
    #[serde(default)]
    pub max_pilots: Option<u32>,
    #[serde(default)]
    pub in_air: Option<AirSpawn>,
    #[serde(default)]
    pub in_stationary: Option<StationarySpawn>,
    #[serde(default)]
    pub allowed_air_forces: Vec<Label>,
    #[serde(default)]
    pub aircraft_limitations: Option<AircraftLimitations>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirSpawn {
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub speed: Option<u32>,
    #[serde(default)]
    pub pause: Option<u32>,
    #[serde(default)]
    pub always: bool,
    #[serde(default)]
    pub if_deck_is_full: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StationarySpawn {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub return_to_start_position: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftLimitations {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub consider_lost: bool,
    #[serde(default)]
    pub consider_stationary: bool,
    #[serde(default)]
    pub allowed_aircrafts: Vec<AllowedAircraft>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllowedAircraft {
    pub code: String,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub weapon_limitations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub belligerent: Label,
    pub pos: Pos3,
}

/// Structured error body of a non-ok parser response. Network failures
/// are synthesized into the same shape with only `detail` set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceError {
    pub detail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue: Option<Issue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similar: Option<Vec<Issue>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traceback: Option<String>,
}

impl ServiceError {
    pub fn from_detail(detail: impl Into<String>) -> Self {
        ServiceError {
            detail: detail.into(),
            issue: None,
            similar: None,
            traceback: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub number: u64,
    pub url: String,
}
