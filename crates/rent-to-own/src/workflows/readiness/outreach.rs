use super::analysis::ScoredRenter;
use super::domain::OutreachTier;
use serde::Serialize;

/// Personalized outreach copy for one renter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutreachMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub tier: OutreachTier,
    /// Four-way readiness category label.
    pub priority: &'static str,
    pub message: String,
}

impl OutreachMessage {
    pub fn for_renter(renter: &ScoredRenter) -> Self {
        let record = &renter.record;

        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            tier: renter.tier,
            priority: renter.category.label(),
            message: compose(renter),
        }
    }

    /// Shortened message for console previews.
    pub fn preview(&self, max_chars: usize) -> String {
        if self.message.chars().count() <= max_chars {
            return self.message.clone();
        }
        let truncated: String = self.message.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

pub fn outreach_messages(renters: &[ScoredRenter]) -> Vec<OutreachMessage> {
    renters.iter().map(OutreachMessage::for_renter).collect()
}

fn compose(renter: &ScoredRenter) -> String {
    let record = &renter.record;

    match renter.tier {
        OutreachTier::ReadyNow => {
            let down_payment = if record.max_affordable_home > 0.0 {
                format!(
                    " We have special first-time buyer programs with down payments as low as {:.1}%.",
                    record.estimated_down_payment / record.max_affordable_home * 100.0
                )
            } else {
                " We have special first-time buyer programs with low down payment options."
                    .to_string()
            };

            format!(
                "Hi {}! Based on your excellent rental payment history and improved credit score of {}, you're ready to become a homeowner!{} Let's schedule a consultation!",
                record.name, record.credit_score_current, down_payment
            )
        }
        OutreachTier::HighPriority => format!(
            "Hello {}, your consistent rental payments and credit improvement show you're nearly ready for homeownership! With a few small steps, we can help you qualify for a home up to {}. Would you like to learn about our preparation programs?",
            record.name,
            format_dollars(record.max_affordable_home)
        ),
        OutreachTier::NeedsImprovement => format!(
            "Hi {}, we've noticed your improving payment pattern! While you're building toward homeownership, we'd love to help you with credit counseling and savings strategies. Let's create a personalized roadmap to get you ready!",
            record.name
        ),
    }
}

/// Whole-dollar amount with thousands separators, e.g. `$1,250,000`.
pub fn format_dollars(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (position, digit) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}${grouped}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_dollars_groups_thousands() {
        assert_eq!(format_dollars(0.0), "$0");
        assert_eq!(format_dollars(999.4), "$999");
        assert_eq!(format_dollars(1000.0), "$1,000");
        assert_eq!(format_dollars(285_000.0), "$285,000");
        assert_eq!(format_dollars(1_250_000.6), "$1,250,001");
        assert_eq!(format_dollars(-4500.0), "-$4,500");
    }
}
