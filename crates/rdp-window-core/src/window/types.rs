use serde::{Deserialize, Serialize};

/// Rectangle in screen coordinates.
///
/// Width and height are never negative: [`Bounds::new`] clamps them to 0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Identity and geometry of one on-screen target window.
///
/// Descriptors are snapshots: `id` is only meaningful until the window is
/// closed, so callers re-enumerate instead of holding on to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowDescriptor {
    id: u32,
    title: String,
    owner_pid: i32,
    owner_name: String,
    bounds: Bounds,
    layer: i32,
}

impl WindowDescriptor {
    pub fn new(
        id: u32,
        title: String,
        owner_pid: i32,
        owner_name: String,
        bounds: Bounds,
        layer: i32,
    ) -> Self {
        Self {
            id,
            title,
            owner_pid,
            owner_name,
            bounds: Bounds::new(bounds.x, bounds.y, bounds.width, bounds.height),
            layer,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }
    pub fn title(&self) -> &str {
        &self.title
    }
    pub fn owner_pid(&self) -> i32 {
        self.owner_pid
    }
    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
    pub fn layer(&self) -> i32 {
        self.layer
    }

    /// Whether this is an ordinary application window (layer 0)
    pub fn is_normal_layer(&self) -> bool {
        self.layer == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_clamps_negative_extent() {
        let bounds = Bounds::new(10.0, 20.0, -5.0, -1.0);
        assert_eq!(bounds.x, 10.0);
        assert_eq!(bounds.y, 20.0);
        assert_eq!(bounds.width, 0.0);
        assert_eq!(bounds.height, 0.0);
        assert!(bounds.is_empty());
    }

    #[test]
    fn test_descriptor_getters() {
        let window = WindowDescriptor::new(
            123,
            "Work PC".to_string(),
            4321,
            "Windows App".to_string(),
            Bounds::new(100.0, 200.0, 800.0, 600.0),
            0,
        );

        assert_eq!(window.id(), 123);
        assert_eq!(window.title(), "Work PC");
        assert_eq!(window.owner_pid(), 4321);
        assert_eq!(window.owner_name(), "Windows App");
        assert_eq!(window.bounds(), Bounds::new(100.0, 200.0, 800.0, 600.0));
        assert_eq!(window.layer(), 0);
        assert!(window.is_normal_layer());
    }

    #[test]
    fn test_descriptor_enforces_non_negative_bounds() {
        let bounds = Bounds {
            x: 0.0,
            y: 0.0,
            width: -10.0,
            height: 50.0,
        };
        let window =
            WindowDescriptor::new(1, String::new(), 1, "Windows App".to_string(), bounds, 0);
        assert_eq!(window.bounds().width, 0.0);
        assert_eq!(window.bounds().height, 50.0);
    }

    #[test]
    fn test_descriptor_serializes_to_json() {
        let window = WindowDescriptor::new(
            7,
            "Session".to_string(),
            99,
            "Windows App".to_string(),
            Bounds::new(0.0, 0.0, 1.0, 2.0),
            0,
        );
        let json = serde_json::to_value(&window).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["owner_name"], "Windows App");
        assert_eq!(json["bounds"]["height"], 2.0);
    }
}
