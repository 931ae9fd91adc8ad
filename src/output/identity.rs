//! Owner and group name lookup

use std::collections::HashMap;

use nix::unistd::{Gid, Group, Uid, User};

/// Memoized uid/gid to name resolution.
///
/// Ids with no passwd/group entry resolve to their decimal value.
#[derive(Debug, Default)]
pub struct IdentityCache {
    users: HashMap<u32, String>,
    groups: HashMap<u32, String>,
}

impl IdentityCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_name(&mut self, uid: u32) -> &str {
        self.users.entry(uid).or_insert_with(|| lookup_user(uid))
    }

    pub fn group_name(&mut self, gid: u32) -> &str {
        self.groups.entry(gid).or_insert_with(|| lookup_group(gid))
    }
}

fn lookup_user(uid: u32) -> String {
    match User::from_uid(Uid::from_raw(uid)) {
        Ok(Some(user)) => user.name,
        _ => uid.to_string(),
    }
}

fn lookup_group(gid: u32) -> String {
    match Group::from_gid(Gid::from_raw(gid)) {
        Ok(Some(group)) => group.name,
        _ => gid.to_string(),
    }
}
