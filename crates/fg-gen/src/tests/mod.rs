mod serializer;

use fg_core::{OrgCatalog, OrgEntry};

use chrono::NaiveDate;

pub(crate) fn test_catalog(size: usize) -> OrgCatalog {
    let names = ["Acme", "Beta", "GenoMap"];
    OrgCatalog::new(
        (0..size)
            .map(|i| {
                let name = names
                    .get(i)
                    .map_or_else(|| format!("Org Number {}", i + 1), |name| name.to_string());
                OrgEntry::new(name.clone(), format!("About {name}."))
            })
            .collect(),
    )
}

pub(crate) fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
}
