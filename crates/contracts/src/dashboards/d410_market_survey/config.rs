use super::section::{SectionId, SectionNav};
use crate::shared::chart::MAX_CHART_VALUE;
use crate::shared::format::{format_thousands, TooltipFormat};
use crate::shared::series::LabeledSeries;
use anyhow::Context;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Everything the survey dashboard shows, built once and handed to the
/// view at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyDashboardConfig {
    pub header: DashboardHeader,
    pub survey: SurveyMeta,
    pub summary: ExecutiveSummary,
    pub sections: SurveySections,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardHeader {
    pub brand: String,
    pub title: String,
}

/// Where the numbers come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyMeta {
    /// Valid responses after cleaning
    pub respondents: u32,
    pub collected_on: NaiveDate,
    pub copyright_holder: String,
}

impl SurveyMeta {
    /// "Based on 3,154 valid survey responses"
    pub fn responses_line(&self) -> String {
        format!(
            "Based on {} valid survey responses",
            format_thousands(self.respondents as u64)
        )
    }

    /// "Based on 3,154 valid survey responses collected in February 2025"
    pub fn collection_line(&self) -> String {
        format!(
            "{} collected in {}",
            self.responses_line(),
            self.collected_on.format("%B %Y")
        )
    }

    pub fn copyright_line(&self) -> String {
        format!(
            "\u{00a9} {} {}. Confidential market research.",
            self.collected_on.year(),
            self.copyright_holder
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutiveSummary {
    pub headline: String,
    pub recommendation: String,
    pub highlights: Vec<Highlight>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub title: String,
    pub text: String,
}

/// One slot per [`SectionId`], so lookup can never miss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveySections {
    pub demographics: SectionContent,
    pub features: SectionContent,
    pub purchasing: SectionContent,
    pub price: SectionContent,
    pub channels: SectionContent,
    pub brands: SectionContent,
}

impl SurveySections {
    pub fn get(&self, id: SectionId) -> &SectionContent {
        match id {
            SectionId::Demographics => &self.demographics,
            SectionId::Features => &self.features,
            SectionId::Purchasing => &self.purchasing,
            SectionId::Price => &self.price,
            SectionId::Channels => &self.channels,
            SectionId::Brands => &self.brands,
        }
    }

    /// Content to render for the navigation state, always exactly one.
    pub fn visible<'a>(
        &'a self,
        nav: &'a SectionNav,
    ) -> impl Iterator<Item = &'a SectionContent> {
        nav.visible().map(move |id| self.get(id))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionContent {
    pub id: SectionId,
    pub title: String,
    pub panels: Vec<ChartPanel>,
    pub insights: InsightBox,
}

/// A chart with its optional heading and caption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPanel {
    #[serde(default)]
    pub title: Option<String>,
    pub chart: ChartSpec,
    #[serde(default)]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub series: LabeledSeries,
    pub kind: ChartKind,
    pub tooltip: TooltipFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartKind {
    Bar {
        /// Fixed value axis; `None` fits the data from zero.
        #[serde(default)]
        y_domain: Option<(f64, f64)>,
        /// Legend entry for the single bar series.
        legend: String,
    },
    Pie,
}

/// Narrative block under a section's charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightBox {
    pub heading: String,
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub recommendation: Option<String>,
}

impl SurveyDashboardConfig {
    pub fn section(&self, id: SectionId) -> &SectionContent {
        self.sections.get(id)
    }

    /// Check the invariants static data gets for free from its
    /// constructors: parallel series lengths, section slots matching their
    /// ids, and values small enough to chart.
    pub fn validate(&self) -> anyhow::Result<()> {
        for id in SectionId::ALL {
            let section = self.section(id);
            anyhow::ensure!(
                section.id == id,
                "section slot '{}' holds content for '{}'",
                id,
                section.id
            );
            for panel in &section.panels {
                panel
                    .chart
                    .series
                    .check()
                    .with_context(|| format!("in section '{}'", id))?;
                for value in &panel.chart.series.values {
                    anyhow::ensure!(
                        chartable(*value),
                        "section '{}': value {} cannot be charted",
                        id,
                        value
                    );
                }
                if let ChartKind::Bar {
                    y_domain: Some((min, max)),
                    ..
                } = panel.chart.kind
                {
                    anyhow::ensure!(
                        chartable(min) && chartable(max),
                        "section '{}': value axis {}..{} cannot be charted",
                        id,
                        min,
                        max
                    );
                    anyhow::ensure!(
                        min < max,
                        "section '{}': empty value axis {}..{}",
                        id,
                        min,
                        max
                    );
                }
            }
        }
        Ok(())
    }

    /// Parse alternative content. Unlike the built-in constructors this
    /// reports malformed series as errors.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: Self =
            serde_json::from_str(json).context("failed to parse survey dashboard config")?;
        config.validate()?;
        Ok(config)
    }
}

fn chartable(value: f64) -> bool {
    value.is_finite() && value.abs() <= MAX_CHART_VALUE
}
