multiversx_sc::imports!();

/// Per-member share balances and the pool totals they claim against.
///
/// `total_shares` always equals the sum of all `shares` entries; both are
/// only ever changed together through `mint_shares` / `burn_all_shares`.
#[multiversx_sc::module]
pub trait ShareLedgerModule {
    fn mint_shares(&self, member: &ManagedAddress, amount: &BigUint, paid_value: &BigUint) {
        self.total_pooled_value().update(|pooled| *pooled += paid_value);
        self.total_shares().update(|total| *total += amount);
        self.shares(member).update(|balance| *balance += amount);
    }

    /// Burns every share of `member` and removes its proportional slice
    /// from the pool. Returns `(burned_shares, payout)`.
    fn burn_all_shares(&self, member: &ManagedAddress) -> (BigUint, BigUint) {
        let balance = self.shares(member).get();
        let payout = self.redeemable_value(&balance);

        self.total_shares().update(|total| *total -= &balance);
        self.total_pooled_value().update(|pooled| *pooled -= &payout);
        self.shares(member).clear();

        (balance, payout)
    }

    /// balance * pooled / total_shares, rounded down.
    fn redeemable_value(&self, balance: &BigUint) -> BigUint {
        let total_shares = self.total_shares().get();
        if total_shares == 0u64 {
            return BigUint::zero();
        }
        (balance * &self.total_pooled_value().get()) / &total_shares
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getShares)]
    fn get_shares(&self, member: &ManagedAddress) -> BigUint {
        self.shares(member).get()
    }

    #[view(getRedeemableValue)]
    fn get_redeemable_value(&self, member: &ManagedAddress) -> BigUint {
        self.redeemable_value(&self.shares(member).get())
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getTotalShares)]
    #[storage_mapper("totalShares")]
    fn total_shares(&self) -> SingleValueMapper<BigUint>;

    #[view(getTotalPooledValue)]
    #[storage_mapper("totalPooledValue")]
    fn total_pooled_value(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("shares")]
    fn shares(&self, member: &ManagedAddress) -> SingleValueMapper<BigUint>;
}
