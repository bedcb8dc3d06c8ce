use serde::Serialize;

/// Named colors resolved by the host's rendering layer.
///
/// `Label` follows the platform's light/dark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseColor {
    Label,
    White,
    Black,
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub base: BaseColor,
    pub alpha: f32,
}

impl Color {
    pub const fn new(base: BaseColor, alpha: f32) -> Self {
        Self { base, alpha }
    }
}

/// Per-button treatment for one visual state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ItemStyle {
    pub tint: Color,
    pub background: Color,
    pub corner_radius: f32,
    pub border_width: f32,
    pub border_color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Shadow {
    pub color: Color,
    pub offset: (f32, f32),
    pub radius: f32,
    pub opacity: f32,
}

/// Container treatment. Fixed for every instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BarStyle {
    pub material: &'static str,
    pub corner_radius: f32,
    pub border_width: f32,
    pub border_color: Color,
    pub shadow: Shadow,
    pub symbol_point_size: f32,
}

pub const BAR_WIDTH: f64 = 240.0;
pub const BAR_HEIGHT: f64 = 52.0;
pub const BUTTON_HEIGHT: f64 = 36.0;
pub const BUTTON_SPACING: f64 = 8.0;
pub const INSET_HORIZONTAL: f64 = 16.0;
pub const INSET_VERTICAL: f64 = 8.0;

pub const BAR_STYLE: BarStyle = BarStyle {
    material: "systemUltraThinMaterial",
    corner_radius: 26.0,
    border_width: 1.0,
    border_color: Color::new(BaseColor::White, 0.15),
    shadow: Shadow {
        color: Color::new(BaseColor::Black, 1.0),
        offset: (0.0, 2.0),
        radius: 8.0,
        opacity: 0.1,
    },
    symbol_point_size: 20.0,
};

pub const ACTIVE_ITEM: ItemStyle = ItemStyle {
    tint: Color::new(BaseColor::Label, 1.0),
    background: Color::new(BaseColor::White, 0.15),
    corner_radius: 18.0,
    border_width: 0.5,
    border_color: Color::new(BaseColor::White, 0.2),
};

pub const DEFAULT_ITEM: ItemStyle = ItemStyle {
    tint: Color::new(BaseColor::Label, 0.7),
    background: Color::new(BaseColor::Clear, 0.0),
    corner_radius: 0.0,
    border_width: 0.0,
    border_color: Color::new(BaseColor::Clear, 0.0),
};
