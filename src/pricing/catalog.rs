//! Static reference data bundled with the calculator.
//!
//! Base prices are absolute amounts, everything else is a multiplier.

use crate::pricing::models::{AcademicLevel, CatalogOption, FieldOption};

pub static MASTER_FIELDS: &[FieldOption] = &[
    FieldOption {
        key: "humanities",
        label: "علوم انسانی و مدیریت",
        value: 12_000_000,
    },
    FieldOption {
        key: "engineering",
        label: "فنی–مهندسی و علوم پایه",
        value: 18_000_000,
    },
    FieldOption {
        key: "medical",
        label: "علوم پزشکی و تجربی",
        value: 20_000_000,
    },
];

pub static PHD_FIELDS: &[FieldOption] = &[
    FieldOption {
        key: "humanities",
        label: "علوم انسانی و مدیریت",
        value: 30_000_000,
    },
    FieldOption {
        key: "engineering",
        label: "فنی–مهندسی و علوم پزشکی",
        value: 40_000_000,
    },
];

pub static WORK_TYPES: &[CatalogOption] = &[
    CatalogOption {
        label: "علوم انسانی / مدیریت ساده",
        value: 1.0,
    },
    CatalogOption {
        label: "علوم انسانی با مدل مفهومی و آماری",
        value: 1.2,
    },
    CatalogOption {
        label: "حسابداری و مالی با مدل ریاضی یا نرم‌افزاری",
        value: 1.3,
    },
    CatalogOption {
        label: "فنی–مهندسی تئوری",
        value: 1.2,
    },
    CatalogOption {
        label: "فنی–مهندسی با شبیه‌سازی نرم‌افزاری",
        value: 1.5,
    },
    CatalogOption {
        label: "علوم پزشکی (کار میدانی ساده)",
        value: 1.3,
    },
    CatalogOption {
        label: "علوم پزشکی (آزمایشگاهی/مدل‌سازی پیچیده)",
        value: 1.7,
    },
];

pub static UNIVERSITY_TYPES: &[CatalogOption] = &[
    CatalogOption {
        label: "پیام نور / علمی‌کاربردی",
        value: 0.9,
    },
    CatalogOption {
        label: "آزاد",
        value: 1.0,
    },
    CatalogOption {
        label: "سراسری (رتبه‌های برتر)",
        value: 1.2,
    },
];

pub static DELIVERY_TIMES: &[CatalogOption] = &[
    CatalogOption {
        label: "عادی (۳ تا ۶ ماه)",
        value: 1.0,
    },
    CatalogOption {
        label: "فشرده (۱ تا ۳ ماه)",
        value: 1.3,
    },
    CatalogOption {
        label: "فوری (زیر ۱ ماه)",
        value: 1.5,
    },
];

/// The multiplier catalogs a selection can draw from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    WorkType,
    University,
    DeliveryTime,
}

impl CatalogKind {
    pub fn options(self) -> &'static [CatalogOption] {
        match self {
            Self::WorkType => WORK_TYPES,
            Self::University => UNIVERSITY_TYPES,
            Self::DeliveryTime => DELIVERY_TIMES,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::WorkType => "work type",
            Self::University => "university",
            Self::DeliveryTime => "delivery time",
        }
    }

    /// Whether `value` is one of the multipliers this catalog offers
    pub fn contains(self, value: f64) -> bool {
        contains_value(self.options(), value)
    }
}

pub fn contains_value(catalog: &[CatalogOption], value: f64) -> bool {
    catalog.iter().any(|option| option.value == value)
}

/// Field catalog for the given academic level
pub fn fields_for(level: AcademicLevel) -> &'static [FieldOption] {
    match level {
        AcademicLevel::Master => MASTER_FIELDS,
        AcademicLevel::Phd => PHD_FIELDS,
    }
}

pub fn find_field(level: AcademicLevel, key: &str) -> Option<&'static FieldOption> {
    fields_for(level).iter().find(|field| field.key == key)
}
