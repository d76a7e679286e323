// Shared whitebox harness for the ballot contract tests.
//
// Managed values (addresses, buffers) are only created inside the
// whitebox closures, where a DebugApi context is active.

#![allow(dead_code)]

use ballot::{proposals::ProposalsModule, voters::VotersModule, Ballot};
use multiversx_sc_scenario::api::DebugApi;
use multiversx_sc_scenario::imports::*;

pub type BallotContract = ballot::ContractObj<DebugApi>;

pub const CHAIR: TestAddress = TestAddress::new("chair");
pub const X: TestAddress = TestAddress::new("x");
pub const Y: TestAddress = TestAddress::new("y");
pub const Z: TestAddress = TestAddress::new("z");
pub const W: TestAddress = TestAddress::new("w");
pub const V: TestAddress = TestAddress::new("v");
pub const OUTSIDER: TestAddress = TestAddress::new("outsider");

pub const BALLOT: TestSCAddress = TestSCAddress::new("ballot");
pub const CODE_PATH: MxscPath = MxscPath::new("output/ballot.mxsc.json");

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.register_contract(CODE_PATH, ballot::ContractBuilder);
    blockchain
}

pub fn managed(address: TestAddress) -> ManagedAddress<DebugApi> {
    ManagedAddress::from_address(&address.to_address())
}

/// Deploys the ballot with `CHAIR` as chairperson and funds every test account.
pub fn setup() -> ScenarioWorld {
    let mut world = world();

    world.account(CHAIR).nonce(1);
    for account in [X, Y, Z, W, V, OUTSIDER] {
        world.account(account).nonce(1);
    }

    world
        .tx()
        .from(CHAIR)
        .raw_deploy()
        .code(CODE_PATH)
        .new_address(BALLOT)
        .whitebox(ballot::contract_obj, |sc| {
            sc.init(managed(CHAIR));
        });

    world
}

pub fn call<F>(world: &mut ScenarioWorld, from: TestAddress, f: F)
where
    F: FnOnce(BallotContract),
{
    world.tx().from(from).to(BALLOT).whitebox(ballot::contract_obj, f);
}

pub fn call_fails<F>(world: &mut ScenarioWorld, from: TestAddress, message: &'static str, f: F)
where
    F: FnOnce(BallotContract),
{
    world
        .tx()
        .from(from)
        .to(BALLOT)
        .returns(ExpectError(4, message))
        .whitebox(ballot::contract_obj, f);
}

/// Runs a successful call and returns the topics of every event it logged.
/// The first topic of each entry is the event identifier.
pub fn call_logged<F>(world: &mut ScenarioWorld, from: TestAddress, f: F) -> Vec<Vec<Vec<u8>>>
where
    F: FnOnce(BallotContract),
{
    let logs = world
        .tx()
        .from(from)
        .to(BALLOT)
        .returns(ReturnsLogs)
        .whitebox(ballot::contract_obj, f);
    logs.into_iter().map(|log| log.topics).collect()
}

/// Like `call_fails`, also returning the topics of whatever the call logged.
pub fn call_fails_logged<F>(
    world: &mut ScenarioWorld,
    from: TestAddress,
    message: &'static str,
    f: F,
) -> Vec<Vec<Vec<u8>>>
where
    F: FnOnce(BallotContract),
{
    let (_, logs) = world
        .tx()
        .from(from)
        .to(BALLOT)
        .returns(ExpectError(4, message))
        .returns(ReturnsLogs)
        .whitebox(ballot::contract_obj, f);
    logs.into_iter().map(|log| log.topics).collect()
}

pub fn address_bytes(address: TestAddress) -> Vec<u8> {
    address.to_address().as_bytes().to_vec()
}

pub fn query<F>(world: &mut ScenarioWorld, f: F)
where
    F: FnOnce(BallotContract),
{
    world.query().to(BALLOT).whitebox(ballot::contract_obj, f);
}

pub fn add_proposals(world: &mut ScenarioWorld, names: &[&'static str]) {
    for &name in names {
        call(world, CHAIR, move |sc| {
            sc.add_proposal(ManagedBuffer::from(name));
        });
    }
}

pub fn register(world: &mut ScenarioWorld, voters: &[TestAddress]) {
    for &voter in voters {
        call(world, CHAIR, move |sc| {
            sc.register_voter(managed(voter));
        });
    }
}

pub fn delegate(world: &mut ScenarioWorld, from: TestAddress, to: TestAddress) {
    call(world, from, move |sc| {
        sc.delegate_vote(managed(to));
    });
}

pub fn vote(world: &mut ScenarioWorld, from: TestAddress, proposal_id: u8) {
    call(world, from, move |sc| {
        sc.vote(proposal_id);
    });
}

/// Weight is only ever moved between voters or spent into a proposal, and a
/// voter who has voted holds none.
pub fn assert_invariants(world: &mut ScenarioWorld) {
    query(world, |sc| {
        let mut voter_count = 0u64;
        let mut weight_in_play = 0u64;

        for address in sc.registered_voters().iter() {
            let voter = sc.voters(&address).get();
            assert!(voter.is_registered);
            if voter.has_voted {
                assert_eq!(voter.weight, 0);
            }
            voter_count += 1;
            weight_in_play += u64::from(voter.weight);
        }
        for id in 1..=sc.proposal_count().get() {
            weight_in_play += u64::from(sc.proposals(id).get().vote_count);
        }

        assert_eq!(weight_in_play, voter_count);
    });
}
