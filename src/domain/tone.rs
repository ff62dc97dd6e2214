//! Label to display tone mapping
//!
//! Each function takes the label as displayed and falls back to
//! [`Tone::Neutral`] for anything it does not know. The UI turns tones into
//! terminal colours.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Green,
    Blue,
    Red,
    Orange,
    Yellow,
    Purple,
    Neutral,
}

pub fn project_status_tone(status: &str) -> Tone {
    match status {
        "In Progress" => Tone::Blue,
        "Delayed" => Tone::Red,
        "Almost Done" => Tone::Green,
        "Started" => Tone::Orange,
        _ => Tone::Neutral,
    }
}

pub fn priority_tone(priority: &str) -> Tone {
    match priority {
        "High" => Tone::Red,
        "Medium" => Tone::Yellow,
        "Low" => Tone::Green,
        _ => Tone::Neutral,
    }
}

pub fn payment_status_tone(status: &str) -> Tone {
    match status {
        "Paid" => Tone::Green,
        "Pending" => Tone::Orange,
        "Overdue" => Tone::Red,
        _ => Tone::Neutral,
    }
}

pub fn worker_status_tone(status: &str) -> Tone {
    match status {
        "Available" => Tone::Green,
        _ => Tone::Neutral,
    }
}

/// Health label used by the dashboard's recent projects panel.
pub fn project_health_tone(status: &str) -> Tone {
    match status {
        "On Track" => Tone::Green,
        "Delayed" => Tone::Red,
        "Almost Done" => Tone::Blue,
        _ => Tone::Orange,
    }
}

/// Red once more than 90% of the budget is spent.
pub fn spend_tone(spent: u64, budget: u64) -> Tone {
    if budget == 0 {
        return if spent > 0 { Tone::Red } else { Tone::Green };
    }
    if spent as f64 / budget as f64 > 0.9 {
        Tone::Red
    } else {
        Tone::Green
    }
}

/// Budget usage badge in the reports view.
pub fn usage_tone(percentage: u32) -> Tone {
    if percentage > 90 {
        Tone::Red
    } else if percentage > 70 {
        Tone::Orange
    } else {
        Tone::Green
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_status_tones() {
        assert_eq!(project_status_tone("In Progress"), Tone::Blue);
        assert_eq!(project_status_tone("Delayed"), Tone::Red);
        assert_eq!(project_status_tone("Almost Done"), Tone::Green);
        assert_eq!(project_status_tone("Started"), Tone::Orange);
        assert_eq!(project_status_tone("Cancelled"), Tone::Neutral);
    }

    #[test]
    fn test_priority_and_payment_fallbacks() {
        assert_eq!(priority_tone("Medium"), Tone::Yellow);
        assert_eq!(priority_tone("urgent"), Tone::Neutral);
        assert_eq!(payment_status_tone("Overdue"), Tone::Red);
        assert_eq!(payment_status_tone(""), Tone::Neutral);
    }

    #[test]
    fn test_spend_tone_threshold() {
        assert_eq!(spend_tone(2_125_000, 2_500_000), Tone::Green);
        assert_eq!(spend_tone(1_140_000, 1_200_000), Tone::Red);
        assert_eq!(spend_tone(900, 1_000), Tone::Green);
        assert_eq!(spend_tone(1_500, 1_000), Tone::Red);
        assert_eq!(spend_tone(0, 0), Tone::Green);
    }

    #[test]
    fn test_usage_tone_bands() {
        assert_eq!(usage_tone(95), Tone::Red);
        assert_eq!(usage_tone(85), Tone::Orange);
        assert_eq!(usage_tone(70), Tone::Green);
    }
}
