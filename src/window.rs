use eframe::egui::{Pos2, ViewportBuilder};

// ---------------------------------------------------------------------------
// Window anchor
// ---------------------------------------------------------------------------

/// Base position of the window's top-left corner, before the offset.
pub const BASE_POSITION: [i32; 2] = [100, 100];

/// Top-left corner for a window shifted right by `x_offset` pixels.
pub fn window_anchor(x_offset: i32) -> Pos2 {
    let x = BASE_POSITION[0].saturating_add(x_offset);
    Pos2::new(x as f32, BASE_POSITION[1] as f32)
}

// ---------------------------------------------------------------------------
// Positioners
// ---------------------------------------------------------------------------

/// Places a native window before it is created.
pub trait WindowPositioner: Sync {
    fn name(&self) -> &'static str;

    /// Apply `anchor` to the viewport, or leave it untouched if the
    /// backend cannot place windows.
    fn place(&self, viewport: ViewportBuilder, anchor: Pos2) -> ViewportBuilder;
}

/// Sets the outer position through winit; works where the client may
/// choose its own placement.
pub struct OuterPositioner;

impl WindowPositioner for OuterPositioner {
    fn name(&self) -> &'static str {
        "outer-position"
    }

    fn place(&self, viewport: ViewportBuilder, anchor: Pos2) -> ViewportBuilder {
        viewport.with_position(anchor)
    }
}

/// Leaves placement to the window manager.
pub struct Unpositioned;

impl WindowPositioner for Unpositioned {
    fn name(&self) -> &'static str {
        "unpositioned"
    }

    fn place(&self, viewport: ViewportBuilder, _anchor: Pos2) -> ViewportBuilder {
        viewport
    }
}

static OUTER: OuterPositioner = OuterPositioner;
static UNPOSITIONED: Unpositioned = Unpositioned;

/// Backend name → positioner. Wayland compositors own window placement.
static REGISTRY: &[(&str, &dyn WindowPositioner)] = &[
    ("x11", &OUTER),
    ("windows", &OUTER),
    ("macos", &OUTER),
    ("wayland", &UNPOSITIONED),
];

/// Look up the positioner for a backend, falling back to [`Unpositioned`].
pub fn positioner_for(backend: &str) -> &'static dyn WindowPositioner {
    let key = backend.trim().to_ascii_lowercase();
    match REGISTRY.iter().find(|(name, _)| *name == key) {
        Some((_, positioner)) => *positioner,
        None => {
            log::warn!("Unknown windowing backend {backend:?}; window position left unset");
            &UNPOSITIONED
        }
    }
}

// ---------------------------------------------------------------------------
// Backend detection
// ---------------------------------------------------------------------------

/// Detect the windowing backend of the current session.
pub fn detect_backend() -> String {
    detect_backend_from(std::env::consts::OS, |key| std::env::var_os(key).is_some())
}

/// Detection over an explicit OS name and environment lookup.
pub fn detect_backend_from(os: &str, has_env: impl Fn(&str) -> bool) -> String {
    match os {
        "windows" => "windows".to_string(),
        "macos" => "macos".to_string(),
        _ if has_env("WAYLAND_DISPLAY") => "wayland".to_string(),
        _ if has_env("DISPLAY") => "x11".to_string(),
        _ => "unknown".to_string(),
    }
}
