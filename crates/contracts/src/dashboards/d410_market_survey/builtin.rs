//! Wireless speaker market survey, February 2025.

use super::config::*;
use super::section::SectionId;
use crate::shared::format::TooltipFormat;
use crate::shared::series::LabeledSeries;
use chrono::NaiveDate;

const RATING_LEGEND: &str = "Importance Rating (1-5)";
const SHARE_LEGEND: &str = "Percentage of Respondents";

impl SurveyDashboardConfig {
    /// The survey shipped with the dashboard.
    pub fn builtin() -> Self {
        Self {
            header: DashboardHeader {
                brand: "Beats by Dr. Dre".to_string(),
                title: "Wireless Speaker Market Research Dashboard".to_string(),
            },
            survey: SurveyMeta {
                respondents: 3154,
                collected_on: NaiveDate::from_ymd_opt(2025, 2, 1)
                    .expect("survey collection date is a valid calendar date"),
                copyright_holder: "Beats by Dr. Dre".to_string(),
            },
            summary: summary(),
            sections: SurveySections {
                demographics: demographics(),
                features: features(),
                purchasing: purchasing(),
                price: price(),
                channels: channels(),
                brands: brands(),
            },
        }
    }
}

fn summary() -> ExecutiveSummary {
    ExecutiveSummary {
        headline: "Recommendation: Launch a Premium Wireless Speaker".to_string(),
        recommendation: "Based on our comprehensive market research, we recommend that Beats by Dr. Dre \
            launches a new high-fidelity wireless speaker targeting the $50-$100 price range with a premium \
            option up to $150. The speaker should offer superior sound quality, extended battery life, and \
            versatile connectivity options. The product should be marketed primarily to 18-34 year-old \
            consumers through Amazon and other large multi-brand retailers, emphasizing the brand's \
            reputation for premium audio and positioning against top competitors like JBL and Bose."
            .to_string(),
        highlights: vec![
            Highlight {
                title: "Key Target Audience".to_string(),
                text: "18-34 year-olds (86% of respondents) with mixed income levels, with slightly more \
                    female representation."
                    .to_string(),
            },
            Highlight {
                title: "Ideal Price Point".to_string(),
                text: "$50-$100 range, capturing 35% of market, with premium option up to $150 to maintain \
                    brand positioning."
                    .to_string(),
            },
            Highlight {
                title: "Must-Have Features".to_string(),
                text: "Superior battery life, versatile connectivity options, exceptional sound quality, \
                    and durable design."
                    .to_string(),
            },
        ],
    }
}

fn pie_panel(series: LabeledSeries, title: &str, caption: &str) -> ChartPanel {
    ChartPanel {
        title: Some(title.to_string()),
        chart: ChartSpec {
            series,
            kind: ChartKind::Pie,
            tooltip: TooltipFormat::FixedPercent,
        },
        caption: Some(caption.to_string()),
    }
}

fn bar_panel(
    series: LabeledSeries,
    y_domain: Option<(f64, f64)>,
    legend: &str,
    tooltip: TooltipFormat,
) -> ChartPanel {
    ChartPanel {
        title: None,
        chart: ChartSpec {
            series,
            kind: ChartKind::Bar {
                y_domain,
                legend: legend.to_string(),
            },
            tooltip,
        },
        caption: None,
    }
}

fn insights(heading: &str, paragraphs: &[&str], recommendation: Option<&str>) -> InsightBox {
    InsightBox {
        heading: heading.to_string(),
        paragraphs: paragraphs.iter().map(|p| p.to_string()).collect(),
        recommendation: recommendation.map(str::to_string),
    }
}

fn demographics() -> SectionContent {
    let age = LabeledSeries::new(
        "Age Distribution of Survey Respondents",
        ["Under 18", "18-24", "25-34", "35-44", "45-54", "55-64", "65 and over"],
        vec![4.44, 67.95, 18.26, 4.25, 3.46, 1.40, 0.25],
    );
    let gender = LabeledSeries::new(
        "Gender Distribution of Survey Respondents",
        ["Female", "Male", "Non-binary/Third gender", "Prefer not to say"],
        vec![52.22, 45.09, 1.20, 1.49],
    );
    let income = LabeledSeries::new(
        "Annual Household Income Distribution",
        [
            "Prefer not to say",
            "Less than $25,000",
            "$25,000-$50,000",
            "$50,000-$75,000",
            "$75,000-$100,000",
            "More than $100,000",
        ],
        vec![30.98, 23.11, 13.67, 10.02, 8.28, 13.95],
    );

    SectionContent {
        id: SectionId::Demographics,
        title: "Survey Demographics".to_string(),
        panels: vec![
            pie_panel(
                age,
                "Age Distribution",
                "The overwhelming majority (86%) of respondents fall between 18-34 years old, with \
                 the 18-24 segment dominating at 68%.",
            ),
            pie_panel(
                gender,
                "Gender Distribution",
                "Survey respondents were fairly balanced with a slight female majority (52%), \
                 indicating broad appeal across genders.",
            ),
            pie_panel(
                income,
                "Income Distribution",
                "Income distribution is diverse with 31% preferring not to disclose and 23% reporting \
                 under $25,000, suggesting varied purchasing power.",
            ),
        ],
        insights: insights(
            "Demographic Implications",
            &["The survey reached a young, digitally engaged audience that aligns well with Beats' \
               typical target market. The balanced gender distribution suggests that wireless speakers \
               have broad appeal. The varied income levels indicate opportunity to target different \
               price points, with special focus on the value-conscious majority while still offering \
               premium options for higher-income segments."],
            None,
        ),
    }
}

fn features() -> SectionContent {
    let series = LabeledSeries::new(
        "Rating Important Features (1-5)",
        [
            "Battery Life",
            "Connectivity Options",
            "Sound Quality",
            "Price",
            "Design/Looks",
            "Durability",
        ],
        vec![3.5364, 3.5279, 3.4975, 3.5552, 3.4420, 3.4382],
    );

    SectionContent {
        id: SectionId::Features,
        title: "Important Features".to_string(),
        panels: vec![bar_panel(
            series,
            Some((3.0, 4.0)),
            RATING_LEGEND,
            TooltipFormat::Value,
        )],
        insights: insights(
            "Feature Analysis Insights",
            &["All features received relatively similar importance ratings (3.4-3.6 out of 5), \
               indicating consumers value a well-rounded product rather than one standout feature. \
               However, the marginal differences reveal that Price (3.56) and Battery Life (3.54) are \
               slightly more valued than Design/Looks (3.44) and Durability (3.44)."],
            Some(
                "Beats should focus on creating a balanced product with competitive battery life and \
                 reasonable pricing while ensuring excellent sound quality and connectivity options. \
                 Marketing should emphasize these aspects while still maintaining the brand's signature \
                 attractive design.",
            ),
        ),
    }
}

fn purchasing() -> SectionContent {
    let series = LabeledSeries::new(
        "Rating Factors Influencing Purchase Decision (1-5)",
        [
            "Recommendations",
            "Online Reviews",
            "Expert Reviews",
            "Brand Reputation",
            "Price",
            "Specific Features",
            "Advertising",
        ],
        vec![3.15, 3.34, 3.29, 3.51, 3.53, 3.24, 2.69],
    );

    SectionContent {
        id: SectionId::Purchasing,
        title: "Purchasing Decision Factors".to_string(),
        panels: vec![bar_panel(
            series,
            Some((2.0, 4.0)),
            RATING_LEGEND,
            TooltipFormat::Value,
        )],
        insights: insights(
            "Purchasing Decision Insights",
            &["Price (3.53) and Brand Reputation (3.51) are the most influential factors in purchase \
               decisions, followed by Online Reviews (3.34) and Expert Reviews (3.29). Advertising \
               (2.69) has notably less impact on purchasing decisions."],
            Some(
                "Beats should leverage its strong brand reputation while ensuring competitive pricing. \
                 Marketing efforts should focus on generating positive reviews from both consumers and \
                 experts rather than traditional advertising. Consider influencer partnerships and review \
                 seeding programs to build credibility with the target audience.",
            ),
        ),
    }
}

fn price() -> SectionContent {
    let series = LabeledSeries::new(
        "Price Point Preferences",
        [
            "Less than $50",
            "$50 to $100",
            "$100 to $200",
            "$200 to $300",
            "More than $300",
        ],
        vec![31.99, 34.69, 23.30, 6.75, 3.27],
    );

    SectionContent {
        id: SectionId::Price,
        title: "Price Point Preferences".to_string(),
        panels: vec![bar_panel(series, None, SHARE_LEGEND, TooltipFormat::Percent)],
        insights: insights(
            "Price Preference Insights",
            &["The majority of respondents (67%) prefer wireless speakers priced under $100, with the \
               $50-$100 range being most popular (35%). Only 10% of respondents would pay more than \
               $200, confirming consumer sentiment analysis that identified $150 as a psychological \
               ceiling."],
            Some(
                "Beats should position its new wireless speaker primarily in the $50-$100 price range \
                 to capture the largest market segment (35%). To maintain the premium brand positioning, \
                 Beats could offer a higher-end version up to $150 with additional features, but should \
                 avoid exceeding this price point based on consumer sentiment analysis. This dual approach \
                 would effectively capture 58% of the market (the combined $50-$200 segments) while \
                 respecting price sensitivity.",
            ),
        ),
    }
}

fn channels() -> SectionContent {
    let series = LabeledSeries::new(
        "Purchasing Channels Preferences",
        [
            "Large multi-brand stores (e.g., Amazon)",
            "Multi-brand electronics stores",
            "Department stores",
            "Brand websites",
        ],
        vec![45.02, 21.00, 18.21, 13.77],
    );

    SectionContent {
        id: SectionId::Channels,
        title: "Purchasing Channels".to_string(),
        panels: vec![bar_panel(series, None, SHARE_LEGEND, TooltipFormat::Percent)],
        insights: insights(
            "Purchasing Channel Insights",
            &["Large multi-brand stores like Amazon strongly dominate purchasing preferences (45%), \
               followed by multi-brand electronics stores (21%) and department stores (18%). Brand \
               websites account for only 14% of preferred purchase channels."],
            Some(
                "Prioritize distribution through Amazon and other major online retailers, ensuring \
                 optimal product presentation, competitive pricing, and positive reviews. While \
                 maintaining direct sales through the Beats website, focus marketing resources on driving \
                 traffic to major retailer listings. Develop strong relationships with electronics \
                 retailers for in-store displays and promotions to capture the 21% who prefer these \
                 channels.",
            ),
        ),
    }
}

fn brands() -> SectionContent {
    let series = LabeledSeries::new(
        "Top Brand Mentions",
        ["JBL", "Bose", "Sony", "Samsung", "Marshall"],
        vec![1959.0, 1006.0, 775.0, 469.0, 188.0],
    );

    SectionContent {
        id: SectionId::Brands,
        title: "Brand Recognition".to_string(),
        panels: vec![bar_panel(
            series,
            None,
            "Number of Mentions",
            TooltipFormat::Value,
        )],
        insights: insights(
            "Brand Recognition Insights",
            &["JBL has dominant brand recognition (1,959 mentions), followed by Bose (1,006) and Sony \
               (775). Samsung and Marshall trail significantly. Notably, Beats is not among the top \
               recognized brands for wireless speakers despite its strong presence in headphones."],
            Some(
                "Position the new Beats wireless speaker directly against JBL's offerings in the \
                 $50-$100 range, highlighting Beats' superior sound quality and brand cachet. Leverage \
                 the existing Beats customer base from the headphone market to build awareness and \
                 credibility in the speaker category. Marketing should specifically address how Beats \
                 speakers outperform JBL and Bose models in key areas valued by consumers.",
            ),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::series::ChartPoint;

    #[test]
    fn test_builtin_validates() {
        SurveyDashboardConfig::builtin().validate().unwrap();
    }

    #[test]
    fn test_every_section_resolves_to_itself() {
        let config = SurveyDashboardConfig::builtin();
        for id in SectionId::ALL {
            assert_eq!(config.section(id).id, id);
            assert!(!config.section(id).panels.is_empty());
        }
    }

    #[test]
    fn test_demographics_has_three_pies() {
        let config = SurveyDashboardConfig::builtin();
        let panels = &config.section(SectionId::Demographics).panels;
        assert_eq!(panels.len(), 3);
        assert!(panels.iter().all(|p| p.chart.kind == ChartKind::Pie));
    }

    #[test]
    fn test_brand_points_keep_survey_order() {
        let config = SurveyDashboardConfig::builtin();
        let points = config.section(SectionId::Brands).panels[0].chart.series.points();
        assert_eq!(
            points[0],
            ChartPoint {
                name: "JBL".to_string(),
                value: 1959.0
            }
        );
        assert_eq!(points.last().map(|p| p.name.as_str()), Some("Marshall"));
    }

    #[test]
    fn test_footer_lines() {
        let survey = SurveyDashboardConfig::builtin().survey;
        assert_eq!(
            survey.responses_line(),
            "Based on 3,154 valid survey responses"
        );
        assert_eq!(
            survey.collection_line(),
            "Based on 3,154 valid survey responses collected in February 2025"
        );
        assert_eq!(
            survey.copyright_line(),
            "\u{00a9} 2025 Beats by Dr. Dre. Confidential market research."
        );
    }
}
