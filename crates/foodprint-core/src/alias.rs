//! # Alias Table
//!
//! Lowercase substring aliases that map free-text product names onto
//! canonical entries of the [`REFERENCE_TABLE`](crate::emissions::REFERENCE_TABLE).
//!
//! The table is an ordered slice, not a map: the matcher takes the first
//! alias that occurs in a name, so position is part of the contract. A
//! generic alias listed before a more specific one shadows it (`gurke`
//! precedes `salatgurke`, so every "Salatgurke" resolves to "Gurke").

/// A lowercase substring key paired with the canonical product it selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasEntry {
    /// Lowercase substring searched for in the product name.
    pub key: &'static str,
    /// Canonical name in the reference table.
    pub canonical: &'static str,
}

const fn alias(key: &'static str, canonical: &'static str) -> AliasEntry {
    AliasEntry { key, canonical }
}

/// All aliases in match-priority order.
pub static ALIASES: &[AliasEntry] = &[
    alias("tomate", "Tomate"),
    alias("gurke", "Gurke"),
    alias("salatgurke", "Salatgurke"),
    alias("paprika", "Paprika"),
    alias("aubergine", "Aubergine"),
    alias("zucchini", "Zucchini"),
    alias("kürbis", "Kürbis"),
    alias("hokkaido", "Kürbis"),
    alias("kartoffel", "Kartoffel"),
    alias("möhre", "Möhre"),
    alias("karotte", "Möhre"),
    alias("zwiebel", "Zwiebel"),
    alias("knoblauch", "Knoblauch"),
    alias("spargel", "Spargel"),
    alias("brokkoli", "Brokkoli"),
    alias("blumenkohl", "Blumenkohl"),
    alias("kohlrabi", "Kohlrabi"),
    alias("rote bete", "Rote Bete"),
    alias("lauch", "Lauch"),
    alias("porree", "Lauch"),
    alias("spinat", "Spinat"),
    alias("feldsalat", "Feldsalat"),
    alias("radieschen", "Radieschen"),
    alias("rettich", "Radieschen"),
    alias("mais", "Mais"),
    alias("apfel", "Apfel"),
    alias("birne", "Birne"),
    alias("erdbeere", "Erdbeere"),
    alias("himbeere", "Himbeere"),
    alias("johannisbeere", "Johannisbeere"),
    alias("pflaume", "Pflaume"),
    alias("zwetschge", "Pflaume"),
    alias("kirsche", "Kirsche"),
    alias("zitrone", "Zitrone"),
    alias("limette", "Limette"),
    alias("avocado", "Avocado"),
    alias("basilikum", "Basilikum"),
    alias("petersilie", "Petersilie"),
    alias("schnittlauch", "Schnittlauch"),
    alias("dill", "Dill"),
    alias("champignon", "Champignon"),
    alias("walnuss", "Walnuss"),
    alias("haselnuss", "Haselnuss"),
    alias("cashew", "Cashewkerne"),
    alias("mehl", "Mehl"),
    alias("risotto", "Reis"),
    alias("quinoa", "Quinoa"),
    alias("olivenöl", "Olivenöl"),
    alias("ingwer", "Ingwer"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emissions;

    #[test]
    fn every_alias_targets_a_reference_entry() {
        for a in ALIASES {
            assert!(
                emissions::lookup(a.canonical).is_some(),
                "alias {:?} points at unknown product {:?}",
                a.key,
                a.canonical
            );
        }
    }

    #[test]
    fn keys_are_lowercase() {
        for a in ALIASES {
            assert_eq!(a.key, a.key.to_lowercase(), "alias key must be lowercase");
        }
    }

    #[test]
    fn keys_are_unique() {
        for (i, a) in ALIASES.iter().enumerate() {
            assert!(ALIASES[i + 1..].iter().all(|b| b.key != a.key), "duplicate key {}", a.key);
        }
    }

    #[test]
    fn synonyms_share_a_canonical_name() {
        let lauch: Vec<_> = ALIASES.iter().filter(|a| a.canonical == "Lauch").map(|a| a.key).collect();
        assert_eq!(lauch, ["lauch", "porree"]);
    }

    #[test]
    fn generic_gurke_precedes_salatgurke() {
        let pos = |k: &str| ALIASES.iter().position(|a| a.key == k).unwrap();
        assert!(pos("gurke") < pos("salatgurke"));
    }
}
