multiversx_sc::imports!();

/// Chairperson storage and the privileged-call gate.
#[multiversx_sc::module]
pub trait AccessControlModule {
    fn require_chairperson(&self, caller: &ManagedAddress) {
        require!(
            *caller == self.chairperson().get(),
            "Only the chairperson can do this"
        );
    }

    #[view(getChairperson)]
    #[storage_mapper("chairperson")]
    fn chairperson(&self) -> SingleValueMapper<ManagedAddress>;
}
