//! Initial seeding of groups and users.
//!
//! Runs at startup. The seed is gated by an atomically claimed bootstrap
//! marker row rather than a row-count check, so two instances racing through
//! first boot cannot both seed. Seed rows are inserted through the stores
//! directly; the fixed root/admin credentials are placeholders meant to be
//! changed immediately.

use shared::clock::epoch_seconds;
use shared::password::hash_password;
use std::collections::BTreeSet;
use tracing::{debug, info};

use crate::error::DomainError;
use crate::models::{NewGroup, NewUser};
use crate::store::{BootstrapStore, GroupStore, UserStore};

/// Marker name claimed by the instance that performs the seed.
pub const SEED_MARKER: &str = "initial-seed";

struct SeedGroup {
    name: &'static str,
    visible: bool,
}

const SEED_GROUPS: [SeedGroup; 3] = [
    SeedGroup {
        name: "root",
        visible: false,
    },
    SeedGroup {
        name: "nobody",
        visible: false,
    },
    SeedGroup {
        name: "admin",
        visible: true,
    },
];

/// Seeds the three fixed groups (`root`, `nobody`, `admin`) and the two
/// fixed users (`root`, `admin`). Returns whether this call performed the
/// seed; false means another instance already claimed it.
pub async fn run_initial_seed<B, G, U>(
    bootstrap: &B,
    groups: &G,
    users: &U,
) -> Result<bool, DomainError>
where
    B: BootstrapStore,
    G: GroupStore,
    U: UserStore,
{
    if !bootstrap.claim_marker(SEED_MARKER).await? {
        debug!("initial seed already claimed, skipping");
        return Ok(false);
    }

    info!("seeding initial groups and users");
    let now = epoch_seconds();

    let mut seeded = Vec::with_capacity(SEED_GROUPS.len());
    for spec in SEED_GROUPS {
        let group = groups
            .insert(NewGroup {
                name: spec.name.to_string(),
                permissions: BTreeSet::from([spec.name.to_string()]),
                visible: spec.visible,
                editable: false,
                locked: true,
                created_at: now,
                updated_at: now,
            })
            .await?;
        seeded.push(group);
    }

    let root_group = &seeded[0];
    let admin_group = &seeded[2];

    info!("creating root user");
    users
        .insert(NewUser {
            group_id: root_group.id,
            name: "ROOT".to_string(),
            phone: None,
            job_title: None,
            email: "root@change.me".to_string(),
            username: "root".to_string(),
            password: hash_password("root")?,
            visible: false,
            editable: false,
            locked: true,
            created_at: now,
            updated_at: now,
        })
        .await?;

    info!("creating admin user");
    users
        .insert(NewUser {
            group_id: admin_group.id,
            name: "ADMIN".to_string(),
            phone: None,
            job_title: None,
            email: "admin@change.me".to_string(),
            username: "admin".to_string(),
            password: hash_password("admin")?,
            visible: true,
            editable: false,
            locked: true,
            created_at: now,
            updated_at: now,
        })
        .await?;

    Ok(true)
}
