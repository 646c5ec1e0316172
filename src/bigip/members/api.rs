//! Pool member API operations

use serde_json::json;

use crate::bigip::pools::pool_path;
use crate::bigip::{BigipClient, BigipResource, Member, MemberSession, Pool, StatsBag};
use crate::config::api;
use crate::error::Result;

/// API path of a member within a pool
fn member_path(pool: &Pool, member: &Member) -> String {
    format!(
        "{}/{}/{}",
        pool_path(&pool.uri_name()),
        api::MEMBERS,
        member.uri_name()
    )
}

impl BigipClient {
    /// Get all members of a pool
    pub async fn get_members(&self, pool: &Pool) -> Result<Vec<Member>> {
        let path = format!("{}/{}", pool_path(&pool.uri_name()), api::MEMBERS);
        self.fetch_collection::<Member>(&path, &format!("members of pool '{}'", pool.full_path()))
            .await
    }

    /// Get live statistics of a member
    pub async fn get_member_stats(&self, pool: &Pool, member: &Member) -> Result<StatsBag> {
        let path = format!("{}/{}", member_path(pool, member), api::STATS);
        self.fetch_stats(
            &path,
            &format!(
                "stats for member '{}' of pool '{}'",
                member.name,
                pool.full_path()
            ),
        )
        .await
    }

    /// Set the administrative session state of a member
    pub async fn set_member_session(
        &self,
        pool: &Pool,
        member: &Member,
        session: MemberSession,
    ) -> Result<()> {
        let body = json!({ "session": session.as_str() });
        self.patch_resource(
            &member_path(pool, member),
            &body,
            &format!("member '{}' of pool '{}'", member.name, pool.full_path()),
        )
        .await
    }
}
