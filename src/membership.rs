multiversx_sc::imports!();

use crate::errors::{ERR_MEMBER_EXISTS, ERR_UNAUTHORIZED_ACCESS};

/// Registry of addresses allowed to vote, exchange and rage-quit.
#[multiversx_sc::module]
pub trait MembershipModule {
    // ========================================================
    // ENDPOINT: addMember
    // ========================================================

    #[endpoint(addMember)]
    fn add_member(&self, member: ManagedAddress) {
        require!(!self.members().contains(&member), ERR_MEMBER_EXISTS);

        self.members().insert(member.clone());
        self.member_added_event(&member);
    }

    // ========================================================
    // ENDPOINT: removeMember
    // Removing a non-member is a no-op that still emits the event.
    // ========================================================

    #[endpoint(removeMember)]
    fn remove_member(&self, member: ManagedAddress) {
        self.members().swap_remove(&member);
        self.member_removed_event(&member);
    }

    fn require_member(&self, address: &ManagedAddress) {
        require!(self.members().contains(address), ERR_UNAUTHORIZED_ACCESS);
    }

    /// Caller of the current transaction, checked against the registry.
    fn require_caller_member(&self) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        self.require_member(&caller);
        caller
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(isMember)]
    fn is_member(&self, address: &ManagedAddress) -> bool {
        self.members().contains(address)
    }

    #[view(getMemberCount)]
    fn get_member_count(&self) -> u64 {
        self.members().len() as u64
    }

    #[view(getMembers)]
    fn get_members(&self, from: u64, count: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        let total = self.members().len() as u64;
        let end = core::cmp::min(from.saturating_add(count), total);

        for (idx, member) in self.members().iter().enumerate() {
            let idx = idx as u64;
            if idx >= end {
                break;
            }
            if idx >= from {
                result.push(member);
            }
        }
        result
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("memberAdded")]
    fn member_added_event(&self, #[indexed] member: &ManagedAddress);

    #[event("memberRemoved")]
    fn member_removed_event(&self, #[indexed] member: &ManagedAddress);

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("members")]
    fn members(&self) -> UnorderedSetMapper<ManagedAddress>;
}
