use chrono::{DateTime, Utc};
use shared::protocol::BadgeView;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub sequence: u64,
    pub created_at: DateTime<Utc>,
}

impl Badge {
    pub fn label(&self) -> String {
        format!("Badge at {}", self.created_at.format("%H:%M:%S"))
    }
}

/// Append-only; one badge per double-click, never removed.
#[derive(Debug, Default)]
pub struct BadgeList {
    badges: Vec<Badge>,
}

impl BadgeList {
    pub fn append(&mut self, created_at: DateTime<Utc>) -> &Badge {
        let sequence = self.badges.len() as u64 + 1;
        self.badges.push(Badge {
            sequence,
            created_at,
        });
        &self.badges[self.badges.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.badges.len()
    }

    pub fn views(&self) -> Vec<BadgeView> {
        self.badges
            .iter()
            .map(|badge| BadgeView {
                sequence: badge.sequence,
                created_at: badge.created_at,
                label: badge.label(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn badges_append_in_order_with_time_labels() {
        let mut badges = BadgeList::default();
        let first = Utc.with_ymd_and_hms(2024, 5, 1, 9, 5, 7).unwrap();
        let second = Utc.with_ymd_and_hms(2024, 5, 1, 9, 5, 8).unwrap();

        assert_eq!(badges.append(first).label(), "Badge at 09:05:07");
        badges.append(second);

        let views = badges.views();
        assert_eq!(badges.len(), 2);
        assert_eq!(views[0].sequence, 1);
        assert_eq!(views[1].label, "Badge at 09:05:08");
    }
}
