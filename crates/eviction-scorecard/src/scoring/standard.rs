use super::domain::{
    Criterion, GeneralFact, Indicator, IndicatorId, OfficialLink, Region, RegionCode,
    RegionProfile, ResourceLink, Rubric,
};

pub(crate) fn standard_regions() -> Vec<Region> {
    RegionCode::ordered()
        .into_iter()
        .map(|code| Region {
            code,
            display_name: display_name(code),
            kind: code.kind(),
        })
        .collect()
}

const fn display_name(code: RegionCode) -> &'static str {
    match code {
        RegionCode::BC => "British Columbia",
        RegionCode::AB => "Alberta",
        RegionCode::SK => "Saskatchewan",
        RegionCode::MB => "Manitoba",
        RegionCode::ON => "Ontario",
        RegionCode::QC => "Québec",
        RegionCode::NB => "New Brunswick",
        RegionCode::NS => "Nova Scotia",
        RegionCode::PE => "Prince Edward Island",
        RegionCode::NL => "Newfoundland and Labrador",
        RegionCode::YT => "Yukon",
        RegionCode::NT => "Northwest Territories",
        RegionCode::NU => "Nunavut",
    }
}

/// Scores per region in `IndicatorId::ordered()` order.
pub(crate) const STANDARD_SCORES: &[(RegionCode, [u8; 10])] = &[
    (RegionCode::BC, [4, 4, 5, 4, 4, 3, 4, 3, 1, 1]),
    (RegionCode::AB, [3, 4, 3, 1, 1, 3, 2, 2, 3, 4]),
    (RegionCode::SK, [4, 5, 3, 1, 1, 3, 3, 2, 4, 4]),
    (RegionCode::MB, [5, 2, 4, 3, 5, 3, 3, 4, 3, 3]),
    (RegionCode::ON, [4, 5, 3, 3, 3, 3, 4, 5, 5, 4]),
    (RegionCode::QC, [5, 5, 4, 3, 2, 4, 5, 3, 4, 3]),
    (RegionCode::NB, [4, 5, 2, 3, 3, 3, 3, 3, 2, 3]),
    (RegionCode::NS, [4, 4, 3, 1, 1, 3, 5, 4, 3, 1]),
    (RegionCode::PE, [5, 5, 3, 5, 4, 3, 4, 5, 2, 2]),
    (RegionCode::NL, [3, 5, 3, 1, 1, 3, 3, 3, 4, 1]),
    (RegionCode::YT, [3, 3, 3, 2, 2, 3, 2, 3, 3, 3]),
    (RegionCode::NT, [3, 3, 3, 2, 2, 3, 2, 3, 3, 3]),
    (RegionCode::NU, [3, 3, 3, 2, 2, 3, 2, 3, 3, 3]),
];

pub(crate) fn standard_indicators() -> Vec<Indicator> {
    vec![
        Indicator {
            id: IndicatorId::NoticeTermination,
            name: "Notice of Termination",
            short_name: "Notice",
            description: "Required notice periods and termination procedures",
            score_descriptions: [
                "Minimal notice requirements; limited tenant protections",
                "Short notice periods; basic requirements",
                "Moderate notice periods; standard protections",
                "Extended notice periods; strong tenant safeguards",
                "Comprehensive notice requirements; maximum tenant protections",
            ],
            rubric: Some(NOTICE_RUBRIC),
        },
        Indicator {
            id: IndicatorId::HearingDecision,
            name: "Hearing and Decision",
            short_name: "Hearing",
            description: "Dispute period and hearing processes",
            score_descriptions: [
                "Less than one week to dispute; limited hearing access",
                "One week to dispute; basic hearing procedures",
                "10-13 days to dispute; standard hearing processes",
                "14-20 days to dispute; accessible hearing procedures",
                "Two weeks or more to dispute; comprehensive hearing access",
            ],
            rubric: Some(HEARING_RUBRIC),
        },
        Indicator {
            id: IndicatorId::OrderPossession,
            name: "Order of Possession",
            short_name: "Possession",
            description: "Process for obtaining and enforcing possession orders",
            score_descriptions: [
                "Streamlined for landlords; minimal tenant safeguards",
                "Landlord-favorable process; limited protections",
                "Balanced process; standard protections",
                "Tenant-protective procedures; strong safeguards",
                "Comprehensive tenant protections; maximum due process",
            ],
            rubric: None,
        },
        Indicator {
            id: IndicatorId::RentControl,
            name: "Rent Control",
            short_name: "Rent Control",
            description: "Rent increase caps and control mechanisms",
            score_descriptions: [
                "No rent control",
                "Minimal controls; easily circumvented",
                "Moderate controls; some limitations",
                "Strong, enforceable caps tied to inflation levels",
                "Comprehensive rent control with strict enforcement",
            ],
            rubric: Some(RENT_CONTROL_RUBRIC),
        },
        Indicator {
            id: IndicatorId::AboveGuideline,
            name: "Above Guideline Increases",
            short_name: "AGI",
            description: "Rules for rent increases above standard guidelines",
            score_descriptions: [
                "No restrictions on above-guideline increases",
                "Minimal restrictions; easily obtained",
                "Moderate restrictions; standard review process",
                "Significant restrictions; rigorous review required",
                "Strict limitations; tenant-favorable review process",
            ],
            rubric: None,
        },
        Indicator {
            id: IndicatorId::EvictionTypes,
            name: "Eviction Types",
            short_name: "Eviction Types",
            description: "Range and scope of allowable eviction reasons",
            score_descriptions: [
                "Broad eviction grounds; minimal restrictions",
                "Wide eviction grounds; limited restrictions",
                "Standard eviction grounds; moderate restrictions",
                "Limited eviction grounds; strong restrictions",
                "Narrow eviction grounds; maximum tenant protections",
            ],
            rubric: None,
        },
        Indicator {
            id: IndicatorId::Compensation,
            name: "Compensation",
            short_name: "Compensation",
            description: "Required compensation for certain evictions",
            score_descriptions: [
                "No compensation required",
                "Minimal compensation in limited circumstances",
                "Moderate compensation requirements",
                "Strong compensation requirements for most evictions",
                "Comprehensive compensation mandated for all non-fault evictions",
            ],
            rubric: None,
        },
        Indicator {
            id: IndicatorId::Appeals,
            name: "Appeals",
            short_name: "Appeals",
            description: "Appeal and review processes available",
            score_descriptions: [
                "No appeal mechanism; judicial review only",
                "Limited appeal rights; restrictive process",
                "Standard appeal process; moderate access",
                "Accessible appeal process; multiple review options",
                "Comprehensive appeal rights; tenant-friendly review mechanisms",
            ],
            rubric: None,
        },
        Indicator {
            id: IndicatorId::OnusFiling,
            name: "Onus and Filing Fee",
            short_name: "Onus & Fees",
            description: "Who must file and associated costs",
            score_descriptions: [
                "Tenant must file; high fees with no waivers",
                "Tenant must file; moderate fees with limited waivers",
                "Mixed onus; standard fees with some waivers",
                "Landlord must file; low fees with waivers available",
                "Landlord must file; no fees or automatic waivers",
            ],
            rubric: Some(ONUS_RUBRIC),
        },
        Indicator {
            id: IndicatorId::ConditionalOrders,
            name: "Conditional Orders",
            short_name: "Conditional",
            description: "Availability of conditional eviction orders",
            score_descriptions: [
                "No conditional orders available",
                "Limited conditional orders; rarely granted",
                "Standard conditional orders; available in some cases",
                "Accessible conditional orders; frequently available",
                "Comprehensive conditional order system; tenant-favorable",
            ],
            rubric: None,
        },
    ]
}

// Rubric criteria below are illustrative wording, not statutory tests.
const NOTICE_RUBRIC: Rubric = Rubric::new([
    &[
        Criterion {
            label: "Notice period",
            text: "Under 10 days for most grounds",
        },
        Criterion {
            label: "Form and service",
            text: "No prescribed form; informal service accepted",
        },
    ],
    &[
        Criterion {
            label: "Notice period",
            text: "10 to 14 days for most grounds",
        },
        Criterion {
            label: "Form and service",
            text: "Prescribed form for some grounds only",
        },
    ],
    &[
        Criterion {
            label: "Notice period",
            text: "One month for cause, longer for landlord use",
        },
        Criterion {
            label: "Form and service",
            text: "Prescribed form with reasons stated",
        },
    ],
    &[
        Criterion {
            label: "Notice period",
            text: "Two months or more for no-fault grounds",
        },
        Criterion {
            label: "Form and service",
            text: "Prescribed form, reasons and dispute rights stated",
        },
    ],
    &[
        Criterion {
            label: "Notice period",
            text: "Three months or more for no-fault grounds",
        },
        Criterion {
            label: "Form and service",
            text: "Invalid notice voids the termination",
        },
    ],
]);

const HEARING_RUBRIC: Rubric = Rubric::new([
    &[
        Criterion {
            label: "Dispute window",
            text: "Less than one week",
        },
        Criterion {
            label: "Hearing format",
            text: "Written submissions only",
        },
    ],
    &[
        Criterion {
            label: "Dispute window",
            text: "One week",
        },
        Criterion {
            label: "Hearing format",
            text: "Phone hearings on request",
        },
    ],
    &[
        Criterion {
            label: "Dispute window",
            text: "10 to 13 days",
        },
        Criterion {
            label: "Hearing format",
            text: "Phone or virtual hearings scheduled by default",
        },
    ],
    &[
        Criterion {
            label: "Dispute window",
            text: "14 to 20 days",
        },
        Criterion {
            label: "Hearing format",
            text: "Oral hearing with evidence exchange deadlines",
        },
    ],
    &[
        Criterion {
            label: "Dispute window",
            text: "Two weeks or more, no deemed acceptance",
        },
        Criterion {
            label: "Hearing format",
            text: "Oral hearing required before any order issues",
        },
    ],
]);

const RENT_CONTROL_RUBRIC: Rubric = Rubric::new([
    &[Criterion {
        label: "Cap",
        text: "No annual cap on increases",
    }],
    &[
        Criterion {
            label: "Cap",
            text: "Frequency limits only",
        },
        Criterion {
            label: "Coverage",
            text: "Broad exemptions for new or fixed-term units",
        },
    ],
    &[
        Criterion {
            label: "Cap",
            text: "Annual guideline with exemptions",
        },
        Criterion {
            label: "Coverage",
            text: "Most existing tenancies covered",
        },
    ],
    &[
        Criterion {
            label: "Cap",
            text: "Annual cap tied to inflation",
        },
        Criterion {
            label: "Coverage",
            text: "Applies between and during tenancies",
        },
    ],
    &[
        Criterion {
            label: "Cap",
            text: "Annual cap tied to inflation with strict enforcement",
        },
        Criterion {
            label: "Coverage",
            text: "Unit-based control including vacancy",
        },
    ],
]);

const ONUS_RUBRIC: Rubric = Rubric::new([
    &[
        Criterion {
            label: "Onus to file",
            text: "Tenant must dispute or is deemed to accept",
        },
        Criterion {
            label: "Filing fee",
            text: "High fee, no waiver",
        },
    ],
    &[
        Criterion {
            label: "Onus to file",
            text: "Tenant must dispute or is deemed to accept",
        },
        Criterion {
            label: "Filing fee",
            text: "Moderate fee, limited waiver",
        },
    ],
    &[
        Criterion {
            label: "Onus to file",
            text: "Shared, depending on the ground",
        },
        Criterion {
            label: "Filing fee",
            text: "Standard fee with some waivers",
        },
    ],
    &[
        Criterion {
            label: "Onus to file",
            text: "Landlord applies for possession",
        },
        Criterion {
            label: "Filing fee",
            text: "Low fee, waivers available",
        },
    ],
    &[
        Criterion {
            label: "Onus to file",
            text: "Landlord applies for possession",
        },
        Criterion {
            label: "Filing fee",
            text: "No fee or automatic waiver",
        },
    ],
]);

pub(crate) fn standard_profiles() -> Vec<RegionProfile> {
    vec![
        profile(
            RegionCode::BC,
            "BC Residential Tenancy Branch (RTB)",
            (
                "Tenant",
                "Notice of eviction is deemed accepted if not disputed during the allowed period; tenant disputes by filing with the RTB.",
                "RTA ss. 46(5), 47(5), 48(6), 49(9), 49.1(6)",
            ),
            (
                "$100",
                "$100; or $300 + $10/unit for rent increase apps; fee waiver possible.",
                "RTA Regs s.8",
            ),
            &[(
                "RTB - Eviction Notices",
                "https://www2.gov.bc.ca/gov/content/housing-tenancy/residential-tenancies/evictions",
            )],
        ),
        profile(
            RegionCode::AB,
            "Residential Tenancy Dispute Resolution Service (RTDRS) / Court",
            (
                "Landlord (most cases)",
                "Landlord applies to RTDRS or court; tenant files only to challenge non-renewal of fixed term.",
                "RTA ss. 15, 29, 30",
            ),
            ("$75", "RTDRS application fee, non-refundable.", "Alberta e-Services"),
            &[(
                "RTDRS - File a Claim",
                "https://www.alberta.ca/residential-tenancy-dispute-resolution-service",
            )],
        ),
        profile(
            RegionCode::SK,
            "Office of Residential Tenancies (ORT)",
            (
                "Landlord",
                "Landlord applies to ORT; tenant can dispute notice by applying to ORT.",
                "RTR, 2007 s.17(1), s.18(2); RTA, 2006 s.58-60",
            ),
            ("$50", "Application to the ORT.", "Form 8 - Notice to Vacate"),
            &[("ORT - Applications", "https://saskatchewan.ca/ORT")],
        ),
        profile(
            RegionCode::MB,
            "Residential Tenancies Branch / Commission",
            (
                "Landlord / Hybrid",
                "Landlord gives notice; if tenant doesn't vacate, landlord applies for order of possession.",
                "RTA s.84(1)",
            ),
            ("$60", "Application for order of possession.", "Manitoba RTB"),
            &[("Manitoba RTB", "https://www.gov.mb.ca/cca/rtb/")],
        ),
        profile(
            RegionCode::ON,
            "Landlord and Tenant Board (LTB)",
            (
                "Landlord",
                "Landlord must apply to the LTB; tenant need not apply to dispute.",
                "RTA s.37(1)",
            ),
            ("$186-$201", "$186 online; fee waiver possible.", "LTB website"),
            &[("LTB - Forms & Guides", "https://tribunalsontario.ca/ltb/")],
        ),
        profile(
            RegionCode::QC,
            "Tribunal administratif du logement (TAL)",
            (
                "Landlord",
                "Landlord gives notice; must file with TAL within 1 month if tenant does not respond.",
                "Civil Code; TAL Act",
            ),
            ("$58-$90", "Varies by rent amount.", "TAL Costs"),
            &[("TAL - Tenants & Lessors", "https://www.tal.gouv.qc.ca/")],
        ),
        profile(
            RegionCode::NB,
            "Residential Tenancies Tribunal (Service NB)",
            (
                "Landlord",
                "Landlord serves notice, then applies to Tribunal if tenant doesn't vacate.",
                "RTA s.21",
            ),
            ("None (application)", "$75 Sheriff fee for enforcement.", "Info Bulletin"),
            &[("Service NB - Rentals", "https://www2.snb.ca/")],
        ),
        profile(
            RegionCode::NS,
            "Residential Tenancies Program (NS)",
            (
                "Landlord",
                "Landlord serves notice; applies to Director if tenant doesn't vacate.",
                "RTA s.10AF(1)",
            ),
            ("$31.15", "Application to Director.", "NS Residential Tenancy Forms"),
            &[(
                "NS - Residential Tenancies",
                "https://novascotia.ca/sns/access/land/residential-tenancies.asp",
            )],
        ),
        profile(
            RegionCode::PE,
            "Island Regulatory & Appeals Commission (IRAC) - Rentals",
            (
                "Tenant",
                "Tenant deemed to accept notice unless they file a dispute application.",
                "RTA ss.60(5), 61(6), 62(5)",
            ),
            ("Free", "No fee for tenant application.", "PEI RTO"),
            &[("IRAC - Rentals", "https://www.irac.pe.ca/rental-appeal-board")],
        ),
        profile(
            RegionCode::NL,
            "Residential Tenancies - Service NL",
            (
                "Landlord",
                "Landlord applies for Order of Possession if tenant doesn't vacate.",
                "RTA s.42",
            ),
            (
                "$20",
                "Waived if application is for return of security deposit.",
                "NL Landlord & Tenant",
            ),
            &[(
                "Service NL - Residential Tenancies",
                "https://www.gov.nl.ca/dgsnl/residential-tenancies/",
            )],
        ),
        profile(
            RegionCode::YT,
            "Residential Tenancies Office (RTO)",
            (
                "Landlord",
                "Landlord applies for Dispute Resolution Hearing if tenant doesn't vacate.",
                "RLATA 2012, s.47-s.55",
            ),
            ("$50", "Waived if individual cannot pay.", "Yukon Handbook"),
            &[("Yukon RTO", "https://yukon.ca/en/housing-and-property/residential-tenancy")],
        ),
        profile(
            RegionCode::NT,
            "Rental Office / Supreme Court of NWT",
            (
                "Landlord",
                "Landlord applies to Rental Officer for termination order.",
                "RTA 1988 s.54",
            ),
            ("$100", "Application filing fee.", "NWT Rental Office"),
            &[("NWT - Rental Office", "https://www.justice.gov.nt.ca/en/rental-office/")],
        ),
        profile(
            RegionCode::NU,
            "Rental Officer (Justice)",
            (
                "Landlord",
                "Landlord applies to Rental Officer for termination order.",
                "RTA 2024 s.54-s.60",
            ),
            ("None", "No fee mentioned in legislation.", "Nunavut RTO"),
            &[(
                "Nunavut - Residential Tenancies",
                "https://www.gov.nu.ca/justice/information/residential-tenancies",
            )],
        ),
    ]
}

type FactRow = (&'static str, &'static str, &'static str);

fn profile(
    code: RegionCode,
    tribunal: &'static str,
    onus: FactRow,
    fee: FactRow,
    links: &[(&'static str, &'static str)],
) -> RegionProfile {
    let fact = |(short, details, reference): FactRow| GeneralFact {
        short,
        details,
        reference,
    };

    RegionProfile {
        code,
        tribunal,
        onus: fact(onus),
        fee: fact(fee),
        links: links
            .iter()
            .map(|&(label, url)| OfficialLink { label, url })
            .collect(),
    }
}

pub(crate) fn standard_resources() -> Vec<ResourceLink> {
    vec![
        ResourceLink {
            key: "process_map",
            title: "Provincial Eviction Process Maps",
            description: "Detailed flowcharts of eviction processes for each province",
            path: "/pdfs/EvictionMaps_2025.pdf",
        },
        ResourceLink {
            key: "methodology",
            title: "Analysis & Methodology Report",
            description: "Complete methodology and analysis of provincial eviction laws",
            path: "/pdfs/Eviction_Report.pdf",
        },
        ResourceLink {
            key: "rubric",
            title: "Technical Rubric",
            description: "Scoring criteria for each indicator",
            path: "/pdfs/Technical_Rubric.pdf",
        },
    ]
}
