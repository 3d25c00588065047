//! Generator configuration.

use crate::error::DeckError;
use deckline_layout::{CapacityPolicy, IcpLayout, LayoutConfig};
use deckline_style::{Length, Palette, Stroke};
use deckline_types::Size;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Page format of the generated deck. Both are 16:9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CanvasProfile {
    /// 11in x 6.1875in.
    #[default]
    Page,
    /// 10in x 5.625in.
    Slide,
}

impl CanvasProfile {
    pub fn size(&self) -> Size {
        match self {
            CanvasProfile::Page => Size::new(792.0, 445.5),
            CanvasProfile::Slide => Size::new(720.0, 405.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Used in footers and in place of a missing center logo.
    pub brand_name: String,
    pub canvas: CanvasProfile,
    /// Logo file. When unset, `assets/logo.png` next to the executable is tried.
    pub logo_path: Option<PathBuf>,
    pub include_logo: bool,
    /// Side of the box the header logo is fitted into. Accepts `"1.8in"`
    /// style strings or plain points.
    pub header_logo_size: Length,
    pub palette: Palette,
    pub capacity: CapacityPolicy,
    pub icp_layout: IcpLayout,
    pub gradient_steps: usize,
    /// Dashed cross on the grid slide. `dash` accepts `"5 3"` shorthand.
    pub grid_divider: Stroke,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let layout = LayoutConfig::default();
        Self {
            brand_name: "GTM Fabric".to_string(),
            canvas: CanvasProfile::default(),
            logo_path: None,
            include_logo: true,
            header_logo_size: Length::inches(1.8),
            palette: Palette::default(),
            capacity: layout.capacity,
            icp_layout: layout.icp_layout,
            gradient_steps: layout.gradient_steps,
            grid_divider: layout.grid_divider,
        }
    }
}

impl GeneratorConfig {
    pub fn from_json(json: &str) -> Result<Self, DeckError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DeckError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn with_brand_name(mut self, brand_name: impl Into<String>) -> Self {
        self.brand_name = brand_name.into();
        self
    }

    pub fn with_canvas(mut self, canvas: CanvasProfile) -> Self {
        self.canvas = canvas;
        self
    }

    pub fn with_logo_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.logo_path = Some(path.into());
        self
    }

    pub fn without_logo(mut self) -> Self {
        self.include_logo = false;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_capacity(mut self, capacity: CapacityPolicy) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_icp_layout(mut self, layout: IcpLayout) -> Self {
        self.icp_layout = layout;
        self
    }

    /// The part of the configuration the slide templates read.
    pub fn layout_config(&self) -> LayoutConfig {
        LayoutConfig {
            capacity: self.capacity,
            icp_layout: self.icp_layout,
            gradient_steps: self.gradient_steps,
            grid_divider: self.grid_divider.clone(),
        }
    }

    /// The logo file to try: the configured path, else `assets/logo.png`
    /// beside the running executable.
    pub fn resolved_logo_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.logo_path {
            return Some(path.clone());
        }
        let exe = std::env::current_exe().ok()?;
        Some(exe.parent()?.join("assets").join("logo.png"))
    }
}
