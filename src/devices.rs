//! Simulated device state.
//!
//! Pure client memory for the demo hardware panels: no backend, no
//! persistence, lost on reload. Each mutation returns the banner text
//! for the panel to emit. Every state value is owned by its panel
//! component and passed down explicitly.

pub const MIN_TEMP: i32 = 16;
pub const MAX_TEMP: i32 = 30;

// ========================
// Lighting
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Room {
    LivingRoom,
    Kitchen,
    Bedroom,
    Exterior,
}

impl Room {
    pub const ALL: [Room; 4] = [Room::LivingRoom, Room::Kitchen, Room::Bedroom, Room::Exterior];

    pub fn label(&self) -> &'static str {
        match self {
            Room::LivingRoom => "Sala de Estar",
            Room::Kitchen => "Cocina",
            Room::Bedroom => "Dormitorio",
            Room::Exterior => "Exterior",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Room::LivingRoom => "livingroom",
            Room::Kitchen => "kitchen",
            Room::Bedroom => "bedroom",
            Room::Exterior => "exterior",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Light {
    pub on: bool,
    pub brightness: u8,
}

/// Lights for the four demo rooms, plus the living-room color and the
/// bedroom lighting mode.
#[derive(Debug, Clone, PartialEq)]
pub struct LightsState {
    living_room: Light,
    kitchen: Light,
    bedroom: Light,
    exterior: Light,
    pub living_room_color: String,
    pub bedroom_mode: String,
}

impl Default for LightsState {
    fn default() -> Self {
        Self {
            living_room: Light { on: true, brightness: 75 },
            kitchen: Light { on: false, brightness: 100 },
            bedroom: Light { on: true, brightness: 30 },
            exterior: Light { on: false, brightness: 100 },
            living_room_color: "neutral".to_string(),
            bedroom_mode: "reading".to_string(),
        }
    }
}

impl LightsState {
    pub fn light(&self, room: Room) -> Light {
        *self.slot(room)
    }

    fn slot(&self, room: Room) -> &Light {
        match room {
            Room::LivingRoom => &self.living_room,
            Room::Kitchen => &self.kitchen,
            Room::Bedroom => &self.bedroom,
            Room::Exterior => &self.exterior,
        }
    }

    fn slot_mut(&mut self, room: Room) -> &mut Light {
        match room {
            Room::LivingRoom => &mut self.living_room,
            Room::Kitchen => &mut self.kitchen,
            Room::Bedroom => &mut self.bedroom,
            Room::Exterior => &mut self.exterior,
        }
    }

    pub fn toggle(&mut self, room: Room, on: bool) -> String {
        self.slot_mut(room).on = on;
        let status = if on { "encendida" } else { "apagada" };
        format!("Luz {} {status}", room.label())
    }

    pub fn set_all(&mut self, on: bool) -> String {
        for room in Room::ALL {
            self.slot_mut(room).on = on;
        }
        let action = if on { "encendidas" } else { "apagadas" };
        format!("Todas las luces {action}")
    }

    /// Clamps to 0..=100.
    pub fn set_brightness(&mut self, room: Room, value: i32) -> u8 {
        let clamped = value.clamp(0, 100) as u8;
        self.slot_mut(room).brightness = clamped;
        clamped
    }

    pub fn set_color(&mut self, color: &str) -> String {
        self.living_room_color = color.to_string();
        "Color de luz actualizado".to_string()
    }

    pub fn set_mode(&mut self, mode: &str) -> String {
        self.bedroom_mode = mode.to_string();
        "Modo de luz actualizado".to_string()
    }
}

// ========================
// Climate
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClimateMode {
    Heat,
    Cool,
    Auto,
}

impl ClimateMode {
    pub const ALL: [ClimateMode; 3] = [ClimateMode::Heat, ClimateMode::Cool, ClimateMode::Auto];

    pub fn label(&self) -> &'static str {
        match self {
            ClimateMode::Heat => "Calefacción",
            ClimateMode::Cool => "Refrigeración",
            ClimateMode::Auto => "Automático",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            ClimateMode::Heat => "heat",
            ClimateMode::Cool => "cool",
            ClimateMode::Auto => "auto",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClimateState {
    /// Simulated ambient reading shown in the header.
    pub current: i32,
    pub target: i32,
    pub mode: ClimateMode,
    pub ac_power: bool,
    pub ac_temp: i32,
    pub ac_mode: String,
}

impl Default for ClimateState {
    fn default() -> Self {
        Self {
            current: 22,
            target: 21,
            mode: ClimateMode::Heat,
            ac_power: true,
            ac_temp: 24,
            ac_mode: "cool".to_string(),
        }
    }
}

impl ClimateState {
    /// Clamps the target to 16..=30 °C.
    pub fn adjust_target(&mut self, delta: i32) -> String {
        self.target = (self.target + delta).clamp(MIN_TEMP, MAX_TEMP);
        format!("Temperatura objetivo: {}°C", self.target)
    }

    pub fn set_mode(&mut self, mode: ClimateMode) -> String {
        self.mode = mode;
        format!("Modo: {}", mode.label())
    }

    pub fn toggle_ac(&mut self, on: bool) -> String {
        self.ac_power = on;
        let status = if on { "encendido" } else { "apagado" };
        format!("Aire acondicionado {status}")
    }

    pub fn set_ac_temp(&mut self, value: i32) -> i32 {
        self.ac_temp = value.clamp(MIN_TEMP, MAX_TEMP);
        self.ac_temp
    }

    pub fn set_ac_mode(&mut self, mode: &str) -> String {
        self.ac_mode = mode.to_string();
        "Modo de AC actualizado".to_string()
    }
}

// ========================
// Security
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct SecurityState {
    pub alarm_armed: bool,
    pub door_sensor: &'static str,
    pub window_sensor: &'static str,
    pub camera: &'static str,
}

impl Default for SecurityState {
    fn default() -> Self {
        Self {
            alarm_armed: false,
            door_sensor: "closed",
            window_sensor: "closed",
            camera: "active",
        }
    }
}

impl SecurityState {
    pub fn set_alarm(&mut self, armed: bool) -> String {
        self.alarm_armed = armed;
        let status = if armed { "activado" } else { "desactivado" };
        format!("Sistema de alarma {status}")
    }

    pub fn status_label(&self) -> &'static str {
        if self.alarm_armed {
            "Activado"
        } else {
            "Desactivado"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_reports_room_and_status() {
        let mut lights = LightsState::default();
        assert_eq!(lights.toggle(Room::Kitchen, true), "Luz Cocina encendida");
        assert!(lights.light(Room::Kitchen).on);
        assert_eq!(lights.toggle(Room::Kitchen, false), "Luz Cocina apagada");
        assert!(!lights.light(Room::Kitchen).on);
    }

    #[test]
    fn set_all_touches_every_room() {
        let mut lights = LightsState::default();
        lights.set_all(true);
        assert!(Room::ALL.iter().all(|&r| lights.light(r).on));
        assert_eq!(lights.set_all(false), "Todas las luces apagadas");
        assert!(Room::ALL.iter().all(|&r| !lights.light(r).on));
    }

    #[test]
    fn brightness_clamps_to_percent_range() {
        let mut lights = LightsState::default();
        assert_eq!(lights.set_brightness(Room::Bedroom, 150), 100);
        assert_eq!(lights.set_brightness(Room::Bedroom, -5), 0);
        assert_eq!(lights.set_brightness(Room::Bedroom, 42), 42);
    }

    #[test]
    fn target_temperature_clamps_to_16_30() {
        let mut climate = ClimateState::default();
        for _ in 0..20 {
            climate.adjust_target(1);
        }
        assert_eq!(climate.target, MAX_TEMP);
        for _ in 0..40 {
            climate.adjust_target(-1);
        }
        assert_eq!(climate.target, MIN_TEMP);
        assert_eq!(climate.adjust_target(1), "Temperatura objetivo: 17°C");
    }

    #[test]
    fn ac_controls_mutate_and_report() {
        let mut climate = ClimateState::default();
        assert_eq!(climate.toggle_ac(false), "Aire acondicionado apagado");
        assert!(!climate.ac_power);
        assert_eq!(climate.set_ac_temp(99), MAX_TEMP);
        assert_eq!(climate.set_mode(ClimateMode::Auto), "Modo: Automático");
    }

    #[test]
    fn alarm_toggles_with_status_label() {
        let mut security = SecurityState::default();
        assert_eq!(security.set_alarm(true), "Sistema de alarma activado");
        assert_eq!(security.status_label(), "Activado");
        security.set_alarm(false);
        assert_eq!(security.status_label(), "Desactivado");
    }
}
