use feed_the_croco::formatter::{get_tick_count, increment_tick};
use speculoos::prelude::*;

#[test]
fn test_tick_counter_increments() {
    let before = get_tick_count();

    increment_tick();
    increment_tick();

    assert_that(&get_tick_count()).is_greater_than_or_equal_to(before + 2);
}
