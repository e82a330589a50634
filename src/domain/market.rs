use strum_macros::{Display, EnumCount, EnumIter, IntoStaticStr};

/// The canonical market list. Variant order is the dashboard order: it fixes
/// each market's grid slot and its palette slot, so the two cannot drift
/// apart. Header matching, colors and titles are all total over this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr, EnumCount, EnumIter)]
pub enum Market {
    #[strum(serialize = "JAPAN")]
    Japan,
    #[strum(serialize = "KOREA")]
    Korea,
    #[strum(serialize = "TAIWAN")]
    Taiwan,
    #[strum(serialize = "HONG KONG")]
    HongKong,
    #[strum(serialize = "SINGAPORE")]
    Singapore,
    #[strum(serialize = "THAILAND")]
    Thailand,
}

impl Market {
    /// The header cell text this market is matched against (case-insensitive).
    pub fn header_label(self) -> &'static str {
        self.into()
    }

    /// Stable position in the canonical order.
    pub fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount as _, IntoEnumIterator};

    #[test]
    fn six_markets_in_canonical_order() {
        let labels: Vec<&str> = Market::iter().map(|m| m.header_label()).collect();
        assert_eq!(
            labels,
            ["JAPAN", "KOREA", "TAIWAN", "HONG KONG", "SINGAPORE", "THAILAND"]
        );
        assert_eq!(Market::COUNT, 6);
    }

    #[test]
    fn index_matches_iteration_order() {
        for (i, market) in Market::iter().enumerate() {
            assert_eq!(market.index(), i);
        }
    }
}
