//! Report figures

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Metric {
    pub title: &'static str,
    pub value: &'static str,
    pub trend: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthlyExpense {
    pub month: &'static str,
    pub amount: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectBudget {
    pub project: &'static str,
    pub spent: u64,
    pub budget: u64,
    pub percentage: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkerPerformance {
    pub name: &'static str,
    pub days_worked: u32,
    pub total_earnings: u64,
    pub rating: f32,
}

impl WorkerPerformance {
    /// Earnings per day worked, rounded to the nearest rupee.
    pub fn average_per_day(&self) -> u64 {
        if self.days_worked == 0 {
            return 0;
        }
        (self.total_earnings as f64 / f64::from(self.days_worked)).round() as u64
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Share {
    pub label: &'static str,
    pub percent: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Attendance {
    pub average: u32,
    pub this_week: u32,
    pub last_week: u32,
}

/// Full scale of the monthly expense bars
pub const MONTHLY_SCALE: u64 = 350_000;

pub static METRICS: [Metric; 4] = [
    Metric {
        title: "Total Revenue",
        value: "₹18,45,670",
        trend: "+12% from last month",
    },
    Metric {
        title: "Projects Completed",
        value: "12",
        trend: "+3 this month",
    },
    Metric {
        title: "Active Workers",
        value: "186",
        trend: "75% utilization",
    },
    Metric {
        title: "Efficiency Rate",
        value: "92%",
        trend: "+5% improvement",
    },
];

pub static MONTHLY_EXPENSES: [MonthlyExpense; 6] = [
    MonthlyExpense { month: "Jan", amount: 245_680 },
    MonthlyExpense { month: "Feb", amount: 189_340 },
    MonthlyExpense { month: "Mar", amount: 312_450 },
    MonthlyExpense { month: "Apr", amount: 278_920 },
    MonthlyExpense { month: "May", amount: 334_120 },
    MonthlyExpense { month: "Jun", amount: 289_560 },
];

pub static PROJECT_BUDGETS: [ProjectBudget; 4] = [
    ProjectBudget {
        project: "Construction Site A",
        spent: 2_125_000,
        budget: 2_500_000,
        percentage: 85,
    },
    ProjectBudget {
        project: "Building Renovation",
        spent: 1_140_000,
        budget: 1_200_000,
        percentage: 95,
    },
    ProjectBudget {
        project: "Road Maintenance",
        spent: 520_000,
        budget: 800_000,
        percentage: 65,
    },
    ProjectBudget {
        project: "Garden Development",
        spent: 150_000,
        budget: 500_000,
        percentage: 30,
    },
];

pub static TOP_WORKERS: [WorkerPerformance; 4] = [
    WorkerPerformance {
        name: "Rajesh Kumar",
        days_worked: 28,
        total_earnings: 14_000,
        rating: 4.8,
    },
    WorkerPerformance {
        name: "Amit Singh",
        days_worked: 25,
        total_earnings: 11_250,
        rating: 4.2,
    },
    WorkerPerformance {
        name: "Suresh Yadav",
        days_worked: 30,
        total_earnings: 16_500,
        rating: 4.9,
    },
    WorkerPerformance {
        name: "Ravi Sharma",
        days_worked: 22,
        total_earnings: 8_800,
        rating: 4.0,
    },
];

pub static WORK_DISTRIBUTION: [Share; 4] = [
    Share { label: "Construction", percent: 45 },
    Share { label: "Maintenance", percent: 25 },
    Share { label: "Renovation", percent: 20 },
    Share { label: "Others", percent: 10 },
];

pub static PAYMENT_METHODS: [Share; 3] = [
    Share { label: "Cash", percent: 60 },
    Share { label: "Bank Transfer", percent: 30 },
    Share { label: "UPI", percent: 10 },
];

pub static ATTENDANCE: Attendance = Attendance {
    average: 87,
    this_week: 92,
    last_week: 85,
};
