//! Demo records loaded when the server starts with seeding enabled.
//!
//! Dates are laid out relative to `now` so that published drives stay open
//! for registration whenever the demo is started.

use chrono::{DateTime, Duration, Utc};
use placement_core::models::{
    application::{Application, ApplicationStatus, Offer, OfferStatus},
    drive::{Drive, DriveMode, DriveStatus, EligibilityCriteria},
    student::StudentRecord,
};
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub drives: Vec<Drive>,
    pub students: Vec<StudentRecord>,
    pub applications: Vec<Application>,
    pub offers: Vec<Offer>,
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn drive(
    company_name: &str,
    role: &str,
    ctc: u64,
    mode: DriveMode,
    location: Option<&str>,
    description: &str,
    process: &[&str],
    eligibility: EligibilityCriteria,
    deadline: DateTime<Utc>,
    status: DriveStatus,
    created_at: DateTime<Utc>,
) -> Drive {
    Drive {
        id: Uuid::new_v4(),
        company_name: company_name.to_string(),
        role: role.to_string(),
        ctc,
        mode,
        location: location.map(str::to_string),
        description: description.to_string(),
        process: strings(process),
        eligibility,
        deadline,
        status,
        created_by: "recruiter1".to_string(),
        created_at,
        review_comments: None,
    }
}

pub fn demo_data(now: DateTime<Utc>) -> SeedData {
    let days = Duration::days;

    let techcorp = drive(
        "TechCorp Solutions",
        "Software Development Engineer",
        4_200_000,
        DriveMode::OnCampus,
        Some("Bangalore, India"),
        "TechCorp is looking for talented software engineers to join our product development team.",
        &[
            "Online Assessment",
            "Technical Interview Round 1",
            "Technical Interview Round 2",
            "HR Interview",
        ],
        EligibilityCriteria {
            min_cgpa: 7.0,
            allowed_branches: strings(&["B.Tech - CSE", "M.Tech - CSE", "Dual Degree - CSE"]),
            allowed_years: vec![2024, 2025],
            max_backlogs: 0,
        },
        now + days(14),
        DriveStatus::Published,
        now - days(10),
    );
    let datawave = drive(
        "DataWave Analytics",
        "Data Analyst",
        9_000_000,
        DriveMode::Virtual,
        None,
        "Join DataWave to work on cutting-edge data analytics projects.",
        &["Aptitude Test", "Case Study", "Technical Interview", "HR Round"],
        EligibilityCriteria {
            min_cgpa: 6.5,
            allowed_branches: strings(&["B.Tech - CSE", "M.Tech - CSE", "M.Tech - CSIS"]),
            allowed_years: vec![2024, 2025],
            max_backlogs: 1,
        },
        now + days(19),
        DriveStatus::Published,
        now - days(5),
    );
    let innovatesoft = drive(
        "InnovateSoft",
        "Full Stack Developer",
        1_500_000,
        DriveMode::OnCampus,
        Some("Hyderabad"),
        "Looking for passionate full-stack developers to build scalable applications.",
        &[
            "Coding Assessment",
            "System Design",
            "Technical Interview",
            "Managerial Round",
        ],
        EligibilityCriteria {
            min_cgpa: 7.5,
            allowed_branches: strings(&["B.Tech - CSE", "Dual Degree - CSE"]),
            allowed_years: vec![2024],
            max_backlogs: 0,
        },
        now + days(9),
        DriveStatus::Published,
        now - days(15),
    );
    let cloudtech = drive(
        "CloudTech Industries",
        "DevOps Engineer",
        11_000_000,
        DriveMode::OffCampus,
        None,
        "Join our DevOps team to work on cloud infrastructure and automation.",
        &[
            "Technical Test",
            "Practical Assignment",
            "Technical Discussion",
            "HR Round",
        ],
        EligibilityCriteria {
            min_cgpa: 7.0,
            allowed_branches: strings(&["B.Tech - CSE", "M.Tech - CSE"]),
            allowed_years: vec![2024, 2025],
            max_backlogs: 0,
        },
        now + days(17),
        DriveStatus::PendingReview,
        now - days(1),
    );
    let financeflow = drive(
        "FinanceFlow",
        "Backend Developer",
        7_300_000,
        DriveMode::Virtual,
        None,
        "Build robust backend systems for financial applications.",
        &[
            "Online Test",
            "Technical Round",
            "System Design",
            "Final Interview",
        ],
        EligibilityCriteria {
            min_cgpa: 7.2,
            allowed_branches: strings(&["B.Tech - CSE", "M.Tech - PDM"]),
            allowed_years: vec![2024],
            max_backlogs: 0,
        },
        now + days(24),
        DriveStatus::Draft,
        now,
    );

    let student = StudentRecord {
        id: "student1".to_string(),
        name: "Rajesh Kumar".to_string(),
        email: "rajesh.kumar@college.edu".to_string(),
        branch: "B.Tech - CSE".to_string(),
        graduation_year: 2025,
        cgpa: 7.8,
        active_backlogs: 0,
    };

    let application = |drive: &Drive, status, applied_days_ago, next_step: &str| Application {
        id: Uuid::new_v4(),
        drive_id: drive.id,
        student_id: student.id.clone(),
        status,
        applied_at: now - days(applied_days_ago),
        next_step: Some(next_step.to_string()),
        resume_url: Some("/resume.pdf".to_string()),
        linkedin_url: None,
        portfolio_url: None,
    };
    let applications = vec![
        application(
            &techcorp,
            ApplicationStatus::Shortlisted,
            8,
            "Technical Interview: pick a slot once published",
        ),
        application(
            &datawave,
            ApplicationStatus::Registered,
            4,
            "Aptitude Test",
        ),
        application(
            &innovatesoft,
            ApplicationStatus::Offered,
            12,
            "Accept or Decline offer",
        ),
    ];

    let offer = Offer {
        id: Uuid::new_v4(),
        drive_id: innovatesoft.id,
        student_id: student.id.clone(),
        company_name: innovatesoft.company_name.clone(),
        role: innovatesoft.role.clone(),
        ctc: 4_500_000,
        joining_date: (now + days(250)).date_naive(),
        offer_letter_url: Some("/offer-letter.pdf".to_string()),
        status: OfferStatus::Pending,
    };

    SeedData {
        drives: vec![techcorp, datawave, innovatesoft, cloudtech, financeflow],
        students: vec![student],
        applications,
        offers: vec![offer],
    }
}
