//! The ICP sales deck: title, E2E solution grid, propensity funnel, then one
//! slide per Ideal Customer Profile.

use crate::assets::LogoAsset;
use crate::campaign::Campaign;
use crate::config::GeneratorConfig;
use crate::deck::{Deck, DeckBuilder, DeckReport};
use crate::error::DeckError;
use deckline_layout::{
    FontLibrary, FunnelLevel, FunnelSlide, FunnelStage, GridSlide, IcpSlide, Quadrant, SlideSpec,
    TitleSlide,
};
use deckline_render_core::DocumentInfo;
use deckline_types::Color;
use std::path::Path;

const GRID_TITLE: &str = "Key Elements Required For E2E Use Case Solutions";
const FUNNEL_TITLE: &str = "Propensity Funnel";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The stock E2E slide: four solution areas around the brand mark.
pub fn e2e_grid_slide() -> GridSlide {
    GridSlide {
        title: GRID_TITLE.to_string(),
        quadrants: vec![
            Quadrant {
                label: "Data &\nInsights".into(),
                color: Color::rgb(0x34, 0x98, 0xdb),
                items: strings(&[
                    "Neutral vendor mgmt (source / vet / negotiate)",
                    "Compelling value of complementary data",
                    "Harmonization (integrated ontology)",
                    "Flexible & scalable pricing model",
                    "1st/2nd/3rd party data integration",
                    "Data and insights licensing options",
                    "Evergreen refresh and resilience",
                    "Integrity assurance",
                ]),
            },
            Quadrant {
                label: "Workflow &\nPlatforms".into(),
                color: Color::rgb(0x27, 0xae, 0x60),
                items: strings(&[
                    "Architecture & design",
                    "Integration & customization",
                    "Analytical tools & visualization",
                    "AI reference framework (MCP)",
                    "LLM training & governance",
                    "Agentic processes & automation",
                ]),
            },
            Quadrant {
                label: "Experts &\nBlueprints".into(),
                color: Color::rgb(0xe7, 0x4c, 0x3c),
                items: strings(&[
                    "Practical examples, case studies & blueprints",
                    "Proof points (economic outcomes)",
                    "Success factors & watch outs",
                    "Board-level credibility & fluency",
                ]),
            },
            Quadrant {
                label: "Services &\nSkills".into(),
                color: Color::rgb(0xf1, 0xc4, 0x0f),
                items: strings(&[
                    "Project management / oversight",
                    "Strategic vision & design",
                    "Process optimization & re-imagination",
                    "Training & enablement",
                    "Change management / comms",
                    "Demand Generation / engagement",
                    "Customer Success / maintenance",
                ]),
            },
        ],
    }
}

pub fn default_funnel_levels() -> Vec<FunnelLevel> {
    [
        "4.4M companies, $127bn annually",
        "11,759 using IBM QRadar",
        "724 intent: Ransomware + SIEM",
        "Contacts by Dept, Location, Seniority",
    ]
    .into_iter()
    .map(|label| FunnelLevel {
        label: label.to_string(),
        vendors: Vec::new(),
    })
    .collect()
}

/// The propensity funnel with its four stock view stages.
pub fn propensity_funnel_slide(levels: Vec<FunnelLevel>) -> FunnelSlide {
    let stage = |title: &str, details: &[&str]| FunnelStage {
        title: title.to_string(),
        details: strings(details),
    };
    FunnelSlide {
        title: FUNNEL_TITLE.to_string(),
        stages: vec![
            stage("Market to Account View", &["TAM-SAM-SOM", "Spend Potential"]),
            stage(
                "Account to Product View",
                &["Competitive Install Base", "Partner Install Base"],
            ),
            stage(
                "Product to User View",
                &["Departments To Target", "In Which Locations"],
            ),
            stage("User to Contact Data", &["Emails, Phone Numbers", "Socials"]),
        ],
        levels,
    }
}

/// Builds ICP decks from campaign data.
///
/// The logo is resolved once, when the generator is created. A missing or
/// unreadable logo only disables it.
pub struct IcpDeckGenerator {
    config: GeneratorConfig,
    fonts: FontLibrary,
    logo: Option<LogoAsset>,
}

impl IcpDeckGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        let logo = if config.include_logo {
            match config.resolved_logo_path() {
                Some(path) => LogoAsset::load(&path),
                None => {
                    log::warn!("Could not locate a default logo; continuing without one");
                    None
                }
            }
        } else {
            None
        };
        Self {
            config,
            fonts: FontLibrary::standard(),
            logo,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Whether slides will carry the logo.
    pub fn logo_enabled(&self) -> bool {
        self.config.include_logo && self.logo.is_some()
    }

    /// Title, E2E grid and funnel, then the ICPs in input order.
    pub fn slides(&self, campaign: &Campaign) -> Vec<SlideSpec> {
        let levels = match &campaign.funnel {
            Some(levels) => levels.iter().map(FunnelLevel::from).collect(),
            None => default_funnel_levels(),
        };

        let mut slides = vec![
            SlideSpec::Title(TitleSlide {
                title: campaign.deck_title(),
                subtitle: campaign.deck_subtitle(),
                date: campaign.campaign_date.clone(),
            }),
            SlideSpec::Grid(e2e_grid_slide()),
            SlideSpec::Funnel(propensity_funnel_slide(levels)),
        ];
        slides.extend(campaign.icps.iter().map(|icp| SlideSpec::Icp(IcpSlide::from(icp))));
        slides
    }

    pub fn build_deck(&self, campaign: &Campaign) -> Deck {
        let mut info = DocumentInfo::new(campaign.deck_title());
        info.subject = Some(campaign.deck_subtitle());
        info.author = Some(self.config.brand_name.clone());

        let mut builder = DeckBuilder::new(&self.config, self.fonts.clone(), self.logo.clone())
            .with_info(info);
        for spec in self.slides(campaign) {
            builder.push(&spec);
        }
        builder.finish()
    }

    pub fn generate_to_file(
        &self,
        campaign: &Campaign,
        path: impl AsRef<Path>,
    ) -> Result<DeckReport, DeckError> {
        let deck = self.build_deck(campaign);
        deck.save(path)?;
        let report = deck.report();
        for t in &report.truncations {
            log::debug!(
                "Page {}: '{}' shows {} of {}",
                t.page,
                t.notice.section,
                t.notice.shown,
                t.notice.total
            );
        }
        Ok(report)
    }
}
