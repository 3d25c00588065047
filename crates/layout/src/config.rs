use deckline_style::{DashPattern, Stroke};
use deckline_types::Color;
use serde::{Deserialize, Serialize};

/// How much content a template shows before it starts hiding items.
///
/// Every cap that hides content is reported back as a truncation notice on
/// the composed slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapacityPolicy {
    /// Key-role badges, bullet lists and roomy signal tracks.
    ///
    /// Defaults to `6`.
    pub max_items_per_section: usize,
    /// Signal mini-cards per track in the dense ICP layout.
    ///
    /// Defaults to `2`.
    pub max_signals_per_track: usize,
    /// Hard character cap for signal descriptions, ellipsis included.
    ///
    /// Defaults to `50`.
    pub description_chars: usize,
    /// Defaults to `4`.
    pub max_funnel_levels: usize,
    /// Lines of wrapped body text (such as the departments paragraph).
    ///
    /// Defaults to `2`.
    pub max_body_lines: usize,
}

impl Default for CapacityPolicy {
    fn default() -> Self {
        Self {
            max_items_per_section: 6,
            max_signals_per_track: 2,
            description_chars: 50,
            max_funnel_levels: 4,
            max_body_lines: 2,
        }
    }
}

/// How the technographic tracks of an ICP slide are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IcpLayout {
    /// Mini-cards with description and vendors, `max_signals_per_track` per track.
    #[default]
    Dense,
    /// One line per signal, `max_items_per_section` per track.
    Roomy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub capacity: CapacityPolicy,
    pub icp_layout: IcpLayout,
    /// Bands in the title slide's background gradient.
    ///
    /// Defaults to `40`.
    pub gradient_steps: usize,
    /// Cross through the middle of the grid slide, in layout points.
    ///
    /// Defaults to `#5a4d6f`, 1.5pt, dashed `5 3`.
    pub grid_divider: Stroke,
}

fn default_grid_divider() -> Stroke {
    Stroke::new(Color::rgb(0x5a, 0x4d, 0x6f), 1.5).dashed(DashPattern::new(5.0, 3.0))
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            capacity: CapacityPolicy::default(),
            icp_layout: IcpLayout::default(),
            gradient_steps: 40,
            grid_divider: default_grid_divider(),
        }
    }
}

impl LayoutConfig {
    /// Signals shown per technographic track for the configured layout.
    pub fn signals_per_track(&self) -> usize {
        match self.icp_layout {
            IcpLayout::Dense => self.capacity.max_signals_per_track,
            IcpLayout::Roomy => self.capacity.max_items_per_section,
        }
    }
}
