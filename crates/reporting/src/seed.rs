//! Seed tables for the Feb 16 – Mar 15 2025 reporting period. These are the
//! fixed inputs the dashboard is built from; nothing here is derived.

use audience_core::{
    AggregateMetrics, ConversionPotential, MetricComparison, SegmentRecord, SegmentTables,
    TrendPoint,
};
use audience_strategy::{SegmentType, StrategyRecord};
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("static seed date")
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn demographics() -> Vec<SegmentRecord> {
    vec![
        SegmentRecord::demographic(
            "Female, 25-34",
            17.4,
            12.52,
            171_381,
            4.2,
            ConversionPotential::VeryHigh,
            strings(&[
                "Career Development",
                "Professional Growth",
                "Tech Skills",
                "Workplace Flexibility",
            ]),
        ),
        SegmentRecord::demographic(
            "Male, 45-54",
            10.72,
            8.64,
            105_568,
            3.8,
            ConversionPotential::High,
            strings(&[
                "Career Transition",
                "Digital Literacy",
                "Management Skills",
                "Industry Credentials",
            ]),
        ),
        SegmentRecord::demographic(
            "Female, 35-44",
            19.9,
            18.62,
            195_969,
            3.5,
            ConversionPotential::High,
            strings(&[
                "Work-Life Balance",
                "Leadership Skills",
                "Industry Certifications",
                "Remote Work",
            ]),
        ),
        SegmentRecord::demographic(
            "Female, 65+",
            5.75,
            5.66,
            56_596,
            2.1,
            ConversionPotential::Medium,
            strings(&[
                "Digital Literacy",
                "Hobby Skills",
                "Personal Growth",
                "Community Connection",
            ]),
        ),
        SegmentRecord::demographic(
            "Male, 55-64",
            3.03,
            3.12,
            29_830,
            1.9,
            ConversionPotential::Medium,
            strings(&[
                "Retirement Planning",
                "Consulting Skills",
                "Digital Tools",
                "Knowledge Transfer",
            ]),
        ),
        SegmentRecord::demographic(
            "Male, 25-34",
            26.26,
            26.8,
            258_647,
            2.7,
            ConversionPotential::Medium,
            strings(&[
                "Technical Skills",
                "Coding",
                "Career Advancement",
                "Entrepreneurship",
            ]),
        ),
        SegmentRecord::demographic(
            "Male, 35-44",
            5.74,
            9.84,
            56_493,
            1.5,
            ConversionPotential::Low,
            strings(&[
                "Management Skills",
                "Leadership",
                "Industry Knowledge",
                "Technical Certification",
            ]),
        ),
    ]
}

pub fn countries() -> Vec<SegmentRecord> {
    vec![
        SegmentRecord::country(
            "United Kingdom",
            3.44,
            0.89,
            33_869,
            ConversionPotential::VeryHigh,
            Some("UK-recognized credentials with European job market focus".to_string()),
        ),
        SegmentRecord::country(
            "Saudi Arabia",
            5.15,
            2.87,
            50_758,
            ConversionPotential::VeryHigh,
            Some("Arabic-supported programs with Gulf employment emphasis".to_string()),
        ),
        SegmentRecord::country(
            "Qatar",
            2.87,
            1.1,
            28_258,
            ConversionPotential::High,
            Some("Executive education with Qatari business context".to_string()),
        ),
        SegmentRecord::country(
            "Kuwait",
            1.93,
            0.39,
            19_047,
            ConversionPotential::High,
            Some("Industry-specific training with Kuwaiti market applications".to_string()),
        ),
        SegmentRecord::country(
            "Bhutan",
            2.42,
            0.95,
            23_861,
            ConversionPotential::High,
            Some("Regional partnerships with cross-border certification".to_string()),
        ),
        SegmentRecord::country(
            "United States",
            59.7,
            72.67,
            587_978,
            ConversionPotential::Medium,
            Some("US-recognized credentials with American employment context".to_string()),
        ),
        SegmentRecord::country(
            "Netherlands",
            6.37,
            8.09,
            62_701,
            ConversionPotential::Medium,
            Some("EU-recognized programs with Dutch/English bilingual options".to_string()),
        ),
    ]
}

pub fn education() -> Vec<SegmentRecord> {
    vec![
        SegmentRecord::education_level("High School", 15.3, ConversionPotential::Medium),
        SegmentRecord::education_level("Some College", 22.7, ConversionPotential::High),
        SegmentRecord::education_level("Bachelor's Degree", 38.4, ConversionPotential::VeryHigh),
        SegmentRecord::education_level("Master's Degree", 18.9, ConversionPotential::High),
        SegmentRecord::education_level("Doctorate", 4.7, ConversionPotential::Medium),
    ]
}

pub fn segment_tables() -> SegmentTables {
    SegmentTables {
        demographics: demographics(),
        countries: countries(),
        education: education(),
    }
}

pub fn aggregate_metrics() -> AggregateMetrics {
    AggregateMetrics {
        views: 984_910,
        reach: 1_244_407,
        reactions: 34_480,
        comments: 418,
        shares: 683,
        engagement_rate: 3.61,
        overall_engagement_rate: 7.16,
        completion_rate: 38.5,
        click_through_rate: 2.3,
    }
}

pub fn metric_comparisons() -> Vec<MetricComparison> {
    vec![
        MetricComparison::new("Engagement Rate", 3.61, 7.16),
        MetricComparison::new("Reactions/1K Views", 35.0, 52.7),
        MetricComparison::new("Comments/1K Views", 0.42, 1.08),
        MetricComparison::new("Shares/1K Views", 0.69, 1.25),
        MetricComparison::new("Watch Time (s)", 45.2, 38.6),
        MetricComparison::new("Completion Rate", 38.5, 31.2),
    ]
}

pub fn trend() -> Vec<TrendPoint> {
    vec![
        TrendPoint {
            date: date(2025, 2, 16),
            views: 23_456,
            engagement: 3.2,
        },
        TrendPoint {
            date: date(2025, 2, 23),
            views: 45_678,
            engagement: 3.5,
        },
        TrendPoint {
            date: date(2025, 3, 1),
            views: 78_901,
            engagement: 3.8,
        },
        TrendPoint {
            date: date(2025, 3, 8),
            views: 65_432,
            engagement: 3.6,
        },
        TrendPoint {
            date: date(2025, 3, 15),
            views: 54_321,
            engagement: 3.4,
        },
    ]
}

pub fn strategies() -> Vec<StrategyRecord> {
    vec![
        StrategyRecord::new(
            "Female, 25-34",
            SegmentType::Demographic,
            ConversionPotential::VeryHigh,
            "Career advancement, flexible learning options",
            strings(&[
                "Download career guide",
                "Free skill assessment",
                "Schedule career consultation",
            ]),
            strings(&[
                "Success stories of women in tech",
                "Flexible learning path guides",
                "Career advancement case studies",
                "Work-life balance tips",
            ]),
            4.2,
            720_000.0,
        ),
        StrategyRecord::new(
            "Male, 45-54",
            SegmentType::Demographic,
            ConversionPotential::High,
            "Career transition, specialized skills",
            strings(&[
                "Career pivot guide",
                "Industry demand report",
                "Skills gap analysis",
            ]),
            strings(&[
                "Mid-career transition stories",
                "Technology adoption guides",
                "Industry expert interviews",
                "Executive format program details",
            ]),
            3.8,
            400_000.0,
        ),
        StrategyRecord::new(
            "Female, 35-44",
            SegmentType::Demographic,
            ConversionPotential::High,
            "Professional upskilling",
            strings(&[
                "Skill gap assessment",
                "Industry networking events",
                "Leadership development guide",
            ]),
            strings(&[
                "Work-life balance success stories",
                "Management skill development paths",
                "Industry certification guides",
                "Peer networking opportunities",
            ]),
            3.5,
            685_000.0,
        ),
        StrategyRecord::new(
            "United Kingdom",
            SegmentType::Geographic,
            ConversionPotential::VeryHigh,
            "UK-recognized credentials",
            strings(&[
                "UK employability guide",
                "Credential comparison tool",
                "UK market skills report",
            ]),
            strings(&[
                "UK market-specific content",
                "British industry partnerships",
                "London job market analysis",
                "UK certification pathways",
            ]),
            4.5,
            152_000.0,
        ),
        StrategyRecord::new(
            "Saudi Arabia",
            SegmentType::Geographic,
            ConversionPotential::VeryHigh,
            "Specialized regional programs",
            strings(&[
                "Arabic program guide",
                "Regional opportunity assessment",
                "Gulf employer connections",
            ]),
            strings(&[
                "Arabic-supported learning materials",
                "Gulf market success stories",
                "Saudi industry needs analysis",
                "Cultural context adaptations",
            ]),
            4.3,
            218_000.0,
        ),
    ]
}
