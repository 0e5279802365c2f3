#![no_main]

use libfuzzer_sys::fuzz_target;

use rust_decimal::Decimal;
use veolas_types::{Allocation, BaseUnits, ChainId, UserVote, UserVotes};
use veolas_voting::{reorder_votes, simulate, validate_allocations, validate_user_votes};

// Fuzz vote reordering with arbitrary prior votes and allocations.
// Each 4-byte record is (nominee id, kind, weight lo, weight hi).
// Whenever both sides fit the budget, the planned order must too.
fuzz_target!(|data: &[u8]| {
    let mut user_votes = UserVotes::new();
    let mut allocations = Vec::new();

    for record in data.chunks_exact(4) {
        let nominee = record[0] % 16;
        // Mixed casing exercises case-insensitive matching.
        let address = if record[1] & 0x80 != 0 {
            format!("0xAB{nominee:02X}")
        } else {
            format!("0xab{nominee:02x}")
        };
        let weight = u16::from_le_bytes([record[2], record[3]]) as u64;

        if record[1] & 1 == 0 {
            user_votes.insert(
                address.as_str().into(),
                UserVote::new(ChainId::GNOSIS, BaseUnits::new(weight)),
            );
        } else {
            // Up to three fractional digits so truncation is covered.
            let percent = Decimal::new(weight as i64, 2 + u32::from(record[1] & 2 != 0));
            allocations.push(Allocation::new(address.as_str(), ChainId::GNOSIS, percent));
        }
    }

    let ordered = reorder_votes(&allocations, &user_votes, &[]);

    let budget = BaseUnits::MAX_WEIGHT;
    if validate_allocations(&allocations, budget).is_ok()
        && validate_user_votes(&user_votes, budget).is_ok()
    {
        assert!(simulate(&user_votes, &ordered, budget).is_ok());
    }
});
