//! Closed vocabularies shared by the catalogs.
//!
//! Every categorical field takes its value from one of these enums. The
//! display string is also the serialized form, so catalog files read the
//! same way the listing pages print them ("Residence Hall", "Next 30 days").
//!
//! Parsing is forgiving about case, surrounding whitespace, and an ASCII
//! hyphen standing in for an en dash, so `"£15k-£25k"` parses as
//! [`TuitionBand::From15kTo25k`].

use crate::error::CatalogError;

/// Declare a closed vocabulary.
///
/// Generates the enum with serde renames, an `ALL` constant in declaration
/// order, `label()`, `Display`, and a case-insensitive `FromStr` that reports
/// [`CatalogError::InvalidValue`] for anything outside the set. A variant may
/// list extra spellings after its label: `RankAsc => "Rank ↑" | "rank-asc"`.
#[macro_export]
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident as $field:literal {
            $( $variant:ident => $label:literal $( | $alias:literal )* ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        $vis enum $name {
            $( #[serde(rename = $label $(, alias = $alias)*)] $variant, )+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// Display string, also used as the serialized form.
            pub fn label(self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }

            /// Extra spellings accepted when parsing.
            pub fn aliases(self) -> &'static [&'static str] {
                match self {
                    $( $name::$variant => &[ $( $alias ),* ], )+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::CatalogError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                let wanted = $crate::vocab::normalize_label(s);
                Self::ALL
                    .iter()
                    .copied()
                    .find(|value| {
                        $crate::vocab::normalize_label(value.label()) == wanted
                            || value
                                .aliases()
                                .iter()
                                .any(|alias| $crate::vocab::normalize_label(alias) == wanted)
                    })
                    .ok_or_else(|| $crate::CatalogError::InvalidValue {
                        field: $field,
                        value: s.to_string(),
                    })
            }
        }
    };
}

/// Canonical comparison form of a label.
#[doc(hidden)]
pub fn normalize_label(label: &str) -> String {
    label.trim().to_lowercase().replace('–', "-")
}

/// Parse a yes/no answer (for "collateral" and "co-applicant" style questions).
pub fn parse_yes_no(field: &'static str, value: &str) -> Result<bool, CatalogError> {
    match normalize_label(value).as_str() {
        "yes" | "y" | "true" => Ok(true),
        "no" | "n" | "false" => Ok(false),
        _ => Err(CatalogError::InvalidValue {
            field,
            value: value.to_string(),
        }),
    }
}

vocabulary! {
    /// Kind of student room.
    pub enum RoomType as "room type" {
        Shared => "Shared",
        Private => "Private",
        Studio => "Studio",
        ResidenceHall => "Residence Hall",
    }
}

vocabulary! {
    /// Distance-from-campus band used by the accommodation page.
    pub enum DistanceBand as "distance" {
        UpTo2Km => "0-2 km",
        From2To5Km => "2-5 km",
        From5To10Km => "5-10 km",
        Over10Km => "10+ km",
    }
}

vocabulary! {
    pub enum CourseLevel as "course level" {
        Foundation => "Foundation",
        Undergraduate => "Undergraduate",
        Postgraduate => "Postgraduate",
        ShortCourse => "Short Course",
    }
}

vocabulary! {
    pub enum StudyMode as "study mode" {
        OnCampus => "On-campus",
        Online => "Online",
        Hybrid => "Hybrid",
    }
}

vocabulary! {
    /// Course length band used by the courses page.
    pub enum CourseLength as "duration" {
        UpTo3Months => "0-3 months",
        From3To6Months => "3-6 months",
        From6To12Months => "6-12 months",
        Over12Months => "12+ months",
    }
}

vocabulary! {
    /// Destination country. Each page offers its own subset.
    pub enum Country as "country" {
        Uk => "UK",
        Usa => "USA",
        Canada => "Canada",
        Australia => "Australia",
        Germany => "Germany",
        Ireland => "Ireland",
        Netherlands => "Netherlands",
        Singapore => "Singapore",
        India => "India",
        Other => "Other",
    }
}

vocabulary! {
    pub enum DegreeLevel as "level" {
        Undergraduate => "Undergraduate",
        Postgraduate => "Postgraduate",
        Phd => "PhD",
    }
}

vocabulary! {
    pub enum FundingType as "funding" {
        Full => "Full",
        Partial => "Partial",
        TuitionWaiver => "Tuition waiver",
        Stipend => "Stipend",
    }
}

vocabulary! {
    /// Coarse application window, as published by the provider.
    pub enum DeadlineWindow as "deadline" {
        Open => "Open",
        Next30Days => "Next 30 days",
        Next90Days => "Next 90 days",
    }
}

vocabulary! {
    pub enum LoanType as "loan type" {
        Secured => "Secured",
        Unsecured => "Unsecured",
    }
}

vocabulary! {
    pub enum Intake as "intake" {
        Rolling => "Rolling",
        Jan => "Jan",
        Feb => "Feb",
        May => "May",
        Jul => "Jul",
        Sep => "Sep",
    }
}

vocabulary! {
    pub enum FoundationStream as "stream" {
        Business => "Business",
        Engineering => "Engineering",
        Medicine => "Medicine",
        ComputerScience => "Computer Science",
        ArtsAndDesign => "Arts & Design",
    }
}

vocabulary! {
    pub enum UndergraduateStream as "stream" {
        Business => "Business",
        Engineering => "Engineering",
        Medicine => "Medicine",
        ComputerScience => "Computer Science",
        ArtsAndDesign => "Arts & Design",
        Law => "Law",
        Psychology => "Psychology",
    }
}

vocabulary! {
    pub enum PostgraduateStream as "stream" {
        Business => "Business",
        Engineering => "Engineering",
        ComputerScience => "Computer Science",
        DataScience => "Data Science",
        Finance => "Finance",
        Law => "Law",
        PublicHealth => "Public Health",
    }
}

vocabulary! {
    pub enum ResearchField as "field" {
        Engineering => "Engineering",
        ComputerScience => "Computer Science",
        DataScience => "Data Science",
        Business => "Business",
        Medicine => "Medicine",
        PublicHealth => "Public Health",
        Law => "Law",
        Psychology => "Psychology",
    }
}

vocabulary! {
    pub enum FoundationDuration as "duration" {
        SixToNineMonths => "6-9 months",
        OneYear => "1 year",
        EighteenMonths => "18 months",
    }
}

vocabulary! {
    pub enum PostgraduateDuration as "duration" {
        OneYear => "1 year",
        TwoYears => "2 years",
    }
}

vocabulary! {
    pub enum UndergraduateDuration as "duration" {
        ThreeYears => "3 years",
        FourYears => "4 years",
    }
}

vocabulary! {
    /// Approximate total tuition band.
    pub enum TuitionBand as "budget" {
        Under15k => "Under £15k",
        From15kTo25k => "£15k–£25k",
        From25kTo40k => "£25k–£40k",
        Over25k => "£25k+",
        Over40k => "£40k+",
    }
}

vocabulary! {
    pub enum MastersDegree as "degree" {
        Msc => "MSc",
        Ma => "MA",
        Mba => "MBA",
        Meng => "MEng",
        Llm => "LLM",
    }
}

vocabulary! {
    pub enum PhdFunding as "funding" {
        Funded => "Funded",
        SelfFunded => "Self-funded",
        Mixed => "Mixed",
    }
}

vocabulary! {
    pub enum AttendanceMode as "mode" {
        FullTime => "Full-time",
        PartTime => "Part-time",
    }
}

vocabulary! {
    pub enum DeadlineCategory as "category" {
        Scholarship => "Scholarship",
        University => "University",
        Visa => "Visa",
        Loan => "Loan",
        Test => "Test",
    }
}

vocabulary! {
    pub enum RankingSystem as "ranking system" {
        Qs => "QS",
        The => "THE",
        Arwu => "ARWU",
    }
}

vocabulary! {
    /// Kind of help requested on the free-service enquiry form.
    pub enum ServiceType as "service" {
        AccommodationShortlist => "Accommodation Shortlist" | "accommodation",
        EducationLoanGuidance => "Education Loan Guidance" | "loan",
        UniversityCourseHelp => "University / Course Help" | "course",
        ScholarshipSupport => "Scholarship Support" | "scholarship",
        VisaGuidance => "Visa Guidance" | "visa",
    }
}
