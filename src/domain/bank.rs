use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BankRecord {
    pub id: &'static str,
    pub name: &'static str,
}

pub static BANKS: &[BankRecord] = &[
    BankRecord { id: "chase", name: "JPMorgan Chase" },
    BankRecord { id: "boa", name: "Bank of America" },
    BankRecord { id: "wells", name: "Wells Fargo" },
    BankRecord { id: "citi", name: "Citibank" },
    BankRecord { id: "hsbc", name: "HSBC" },
    BankRecord { id: "barclays", name: "Barclays" },
];

#[derive(Debug, Clone, Serialize)]
pub struct BanksResponse {
    pub banks: &'static [BankRecord],
}

impl BanksResponse {
    pub fn all() -> Self {
        Self { banks: BANKS }
    }
}

/// Display name for a bank; unknown identifiers are echoed back unchanged.
pub fn bank_name(bank_id: &str) -> &str {
    BANKS
        .iter()
        .find(|b| b.id == bank_id)
        .map(|b| b.name)
        .unwrap_or(bank_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_bank() {
        assert_eq!(bank_name("citi"), "Citibank");
    }

    #[test]
    fn unknown_bank_echoes_identifier_every_time() {
        assert_eq!(bank_name("bank_x"), "bank_x");
        assert_eq!(bank_name("bank_x"), "bank_x");
        assert_eq!(BANKS.len(), 6);
    }

    #[test]
    fn bank_ids_are_unique() {
        for (i, a) in BANKS.iter().enumerate() {
            assert!(BANKS.iter().skip(i + 1).all(|b| b.id != a.id), "duplicate {}", a.id);
        }
    }
}
