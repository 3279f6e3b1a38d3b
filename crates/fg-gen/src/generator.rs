//! Generation driver.
//!
//! Output order is creation order: the admin, then every organisation
//! immediately followed by its users. References therefore always point
//! at records earlier in the list.

use crate::{
    ADMIN_USER_ID, EmailRegistry, GenError, GenErrorResult, NameProvider, localize,
    past_year_datetime, strip_apostrophes, synthesize_email,
};

use fg_config::{
    DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_NAME, DEFAULT_MAX_USERS, DEFAULT_MIN_USERS, DEFAULT_NUM_ORGS,
};
use fg_core::{FixtureRecord, OrgCatalog, Organisation, User};

use std::ops::Range;

use chrono::{DateTime, FixedOffset, Local, NaiveDate, Offset, Utc};
use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Name and address of the bootstrap admin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminIdentity {
    pub name: String,
    pub email: String,
}

impl Default for AdminIdentity {
    fn default() -> Self {
        Self {
            name: String::from(DEFAULT_ADMIN_NAME),
            email: String::from(DEFAULT_ADMIN_EMAIL),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GeneratorSettings {
    /// Organisations are taken from catalog entries `1..=num_orgs`
    pub num_orgs: usize,
    /// Users per organisation, drawn uniformly (end exclusive)
    pub users_per_org: Range<usize>,
    /// Offset attached to every generated timestamp
    pub utc_offset: FixedOffset,
    pub admin: AdminIdentity,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            num_orgs: DEFAULT_NUM_ORGS,
            users_per_org: DEFAULT_MIN_USERS..DEFAULT_MAX_USERS,
            utc_offset: Utc.fix(),
            admin: AdminIdentity::default(),
        }
    }
}

/// Deterministic RNG when a seed is given, OS-seeded otherwise.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

pub struct Generator<'a, R: Rng> {
    catalog: &'a OrgCatalog,
    names: NameProvider,
    settings: GeneratorSettings,
    today: NaiveDate,
    rng: R,
}

impl<'a, R: Rng> Generator<'a, R> {
    pub fn new(catalog: &'a OrgCatalog, settings: GeneratorSettings, rng: R) -> Self {
        Self {
            catalog,
            names: NameProvider,
            settings,
            today: Local::now().date_naive(),
            rng,
        }
    }

    /// Pin the date that timestamps are generated relative to.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Build the full record list for one run.
    ///
    /// Fails on the first organisation whose catalog index is out of range,
    /// before anything is written.
    pub fn generate(&mut self) -> GenErrorResult<Vec<FixtureRecord>> {
        if self.settings.users_per_org.is_empty() {
            return Err(GenError::settings(format!(
                "users_per_org must not be empty, got {:?}",
                self.settings.users_per_org
            )));
        }

        let catalog = self.catalog;
        let mut emails = EmailRegistry::default();

        let admin = self.build_admin();
        emails.claim(admin.email.clone());

        let mut records = vec![FixtureRecord::from(&admin)];
        let mut next_user_id = admin.id;
        let mut user_total = 0usize;

        for org_id in (1..).take(self.settings.num_orgs) {
            let entry = catalog.entry(org_id)?;
            let organisation = Organisation::new(
                org_id,
                entry.name.clone(),
                entry.description.clone(),
                self.timestamp(),
                admin.id,
                self.rng.random_bool(0.5),
                self.rng.random_bool(0.5),
            );
            records.push(FixtureRecord::from(&organisation));

            let user_count = self.rng.random_range(self.settings.users_per_org.clone());
            debug!("Organisation {organisation} gets {user_count} users");

            for _ in 0..user_count {
                next_user_id += 1;
                let name = strip_apostrophes(&self.names.full_name(&mut self.rng));
                let email = emails.claim(synthesize_email(&name, &organisation.name));

                let user = User::new(
                    next_user_id,
                    name,
                    email,
                    self.timestamp(),
                    admin.id,
                    Some(organisation.id),
                );
                trace!("User {user} <{}>", user.email);
                records.push(FixtureRecord::from(&user));
            }
            user_total += user_count;
        }

        info!(
            "Generated {} organisations and {} users (plus admin) relative to {}",
            self.settings.num_orgs, user_total, self.today
        );

        Ok(records)
    }

    fn build_admin(&mut self) -> User {
        User::new(
            ADMIN_USER_ID,
            self.settings.admin.name.clone(),
            self.settings.admin.email.clone(),
            self.timestamp(),
            ADMIN_USER_ID,
            None,
        )
    }

    fn timestamp(&mut self) -> DateTime<FixedOffset> {
        let naive = past_year_datetime(&mut self.rng, self.today);
        localize(naive, self.settings.utc_offset)
    }
}
