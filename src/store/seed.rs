//! Demo dataset

use chrono::NaiveDate;

use crate::domain::{
    Payment, PaymentStatus, Priority, Project, ProjectStatus, Worker, WorkerStatus,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn worker(
    id: u32,
    name: &str,
    phone: &str,
    daily_wage: u64,
    skills: [&str; 2],
    location: &str,
    rating: f32,
    status: WorkerStatus,
    experience: &str,
) -> Worker {
    Worker {
        id,
        name: name.to_string(),
        phone: phone.to_string(),
        daily_wage,
        skills: skills.iter().map(|skill| skill.to_string()).collect(),
        location: location.to_string(),
        rating,
        status,
        experience: experience.to_string(),
    }
}

pub(super) fn workers() -> Vec<Worker> {
    vec![
        worker(
            1,
            "Rajesh Kumar",
            "+91 9876543210",
            500,
            ["Masonry", "Painting"],
            "Delhi",
            4.5,
            WorkerStatus::Available,
            "5 years",
        ),
        worker(
            2,
            "Amit Singh",
            "+91 9876543211",
            450,
            ["Carpentry", "Electrical"],
            "Noida",
            4.2,
            WorkerStatus::Working,
            "3 years",
        ),
        worker(
            3,
            "Suresh Yadav",
            "+91 9876543212",
            550,
            ["Plumbing", "Welding"],
            "Gurgaon",
            4.8,
            WorkerStatus::Available,
            "7 years",
        ),
        worker(
            4,
            "Ravi Sharma",
            "+91 9876543213",
            400,
            ["Painting", "Cleaning"],
            "Delhi",
            4.0,
            WorkerStatus::Working,
            "2 years",
        ),
    ]
}

pub(super) fn projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            name: "Construction Site A".to_string(),
            description: "Multi-story building construction project".to_string(),
            location: "Sector 62, Noida".to_string(),
            start_date: date(2024, 1, 15),
            end_date: date(2024, 6, 30),
            progress: 85,
            status: ProjectStatus::InProgress,
            priority: Priority::High,
            assigned_workers: 45,
            budget: 2_500_000,
            spent: 2_125_000,
        },
        Project {
            id: 2,
            name: "Road Maintenance".to_string(),
            description: "Main road repair and maintenance work".to_string(),
            location: "Delhi-Gurgaon Highway".to_string(),
            start_date: date(2024, 2, 1),
            end_date: date(2024, 4, 15),
            progress: 60,
            status: ProjectStatus::Delayed,
            priority: Priority::Medium,
            assigned_workers: 22,
            budget: 800_000,
            spent: 520_000,
        },
        Project {
            id: 3,
            name: "Building Renovation".to_string(),
            description: "Complete renovation of office building".to_string(),
            location: "Connaught Place, Delhi".to_string(),
            start_date: date(2024, 1, 10),
            end_date: date(2024, 3, 20),
            progress: 95,
            status: ProjectStatus::AlmostDone,
            priority: Priority::High,
            assigned_workers: 18,
            budget: 1_200_000,
            spent: 1_140_000,
        },
        Project {
            id: 4,
            name: "Garden Development".to_string(),
            description: "Landscaping and garden development project".to_string(),
            location: "Cyber City, Gurgaon".to_string(),
            start_date: date(2024, 3, 1),
            end_date: date(2024, 5, 30),
            progress: 30,
            status: ProjectStatus::Started,
            priority: Priority::Low,
            assigned_workers: 12,
            budget: 500_000,
            spent: 150_000,
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn payment(
    id: u32,
    worker_name: &str,
    amount: u64,
    day: u32,
    status: PaymentStatus,
    method: &str,
    description: &str,
    project: &str,
) -> Payment {
    Payment {
        id,
        worker_name: worker_name.to_string(),
        amount,
        date: date(2024, 1, day),
        status,
        payment_method: method.to_string(),
        work_description: description.to_string(),
        project: project.to_string(),
    }
}

pub(super) fn payments() -> Vec<Payment> {
    vec![
        payment(
            1,
            "Rajesh Kumar",
            1_250,
            20,
            PaymentStatus::Paid,
            "Cash",
            "Masonry work - Day 5",
            "Construction Site A",
        ),
        payment(
            2,
            "Amit Singh",
            1_100,
            20,
            PaymentStatus::Paid,
            "Bank Transfer",
            "Electrical work - Day 3",
            "Building Renovation",
        ),
        payment(
            3,
            "Suresh Yadav",
            1_350,
            19,
            PaymentStatus::Paid,
            "Cash",
            "Plumbing work - Day 7",
            "Construction Site A",
        ),
        payment(
            4,
            "Ravi Sharma",
            1_200,
            19,
            PaymentStatus::Pending,
            "Cash",
            "Painting work - Day 2",
            "Road Maintenance",
        ),
        payment(
            5,
            "Mohit Gupta",
            950,
            18,
            PaymentStatus::Overdue,
            "Bank Transfer",
            "Cleaning work - Day 1",
            "Garden Development",
        ),
    ]
}
