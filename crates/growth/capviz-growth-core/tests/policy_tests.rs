use capviz_growth_core::{next_capacity, Doubling, GrowthPolicy, SliceGrowth, GROWTH_THRESHOLD};

/// Walk the amortized step sequence directly: the first member of
/// `cap, cap + (cap + 3*256)/4, ...` that covers the request.
fn amortized_reference(desired_len: usize, current_cap: usize) -> usize {
    let mut cap = current_cap;
    while cap < desired_len {
        cap += (cap + 3 * GROWTH_THRESHOLD) / 4;
    }
    cap
}

/// it should allocate exactly the request when it exceeds naive doubling
#[test]
fn request_beyond_doubling_is_allocated_exactly() {
    assert_eq!(next_capacity(250, 100), 250);
    assert_eq!(next_capacity(1000, 299), 1000);
    for cap in [0usize, 1, 10, 100, 255, 256, 1000, 100_000] {
        let desired = cap * 2 + 1;
        assert_eq!(next_capacity(desired, cap), desired, "cap={cap}");
    }
}

/// it should double small capacities whenever the request fits the doubling
#[test]
fn small_capacities_double() {
    assert_eq!(next_capacity(2, 1), 2);
    for cap in 1..GROWTH_THRESHOLD {
        for desired in [cap / 2, cap + 1, cap * 2] {
            assert_eq!(next_capacity(desired, cap), cap * 2, "desired={desired} cap={cap}");
        }
    }
}

/// it should take minimal amortized steps above the threshold
#[test]
fn large_capacities_grow_by_quarter_steps() {
    assert_eq!(next_capacity(400, 300), 567);
    assert_eq!(next_capacity(567, 300), 567);
    assert_eq!(next_capacity(568, 300), 900);
    // Requests already covered take zero steps.
    assert_eq!(next_capacity(300, 300), 300);
    assert_eq!(next_capacity(100, 300), 300);

    for cap in [256usize, 300, 500, 1000, 4096] {
        let mut desired = cap;
        while desired <= cap * 2 {
            assert_eq!(
                next_capacity(desired, cap),
                amortized_reference(desired, cap),
                "desired={desired} cap={cap}"
            );
            desired += 97;
        }
    }
}

/// it should switch regimes exactly at the threshold
#[test]
fn threshold_boundary() {
    // One below: still doubling, and past the doubling it is exact.
    assert_eq!(next_capacity(510, 255), 510);
    assert_eq!(next_capacity(511, 255), 511);
    // At the threshold the first amortized step is exactly +256.
    assert_eq!(next_capacity(257, 256), 512);
    assert_eq!(next_capacity(512, 256), 512);
    assert_eq!(next_capacity(513, 256), 513);
}

/// it should return at least the desired length for every request
#[test]
fn capacity_always_covers_the_request() {
    let mut cap = 0usize;
    while cap < 2048 {
        let mut desired = 0usize;
        while desired < 5000 {
            let got = next_capacity(desired, cap);
            assert!(got >= desired, "desired={desired} cap={cap} got={got}");
            desired += 17;
        }
        cap += 13;
    }
}

/// it should clamp to the request when growth would overflow
#[test]
fn overflow_clamps_to_request() {
    assert_eq!(next_capacity(usize::MAX, 300), usize::MAX);
    assert_eq!(next_capacity(usize::MAX, usize::MAX / 2 + 1), usize::MAX);
    assert_eq!(next_capacity(usize::MAX - 1, usize::MAX - 10), usize::MAX - 1);
}

/// it should be a pure function of its inputs
#[test]
fn identical_requests_yield_identical_results() {
    for (desired, cap) in [(250usize, 100usize), (400, 300), (7, 6), (0, 0)] {
        assert_eq!(next_capacity(desired, cap), next_capacity(desired, cap));
    }
}

/// it should expose the heuristic and the doubling baseline through the trait
#[test]
fn policies_implement_the_trait() {
    assert_eq!(SliceGrowth.next_capacity(400, 300), 567);
    assert_eq!(SliceGrowth.next_capacity(2, 1), next_capacity(2, 1));

    assert_eq!(Doubling.next_capacity(5, 8), 16);
    assert_eq!(Doubling.next_capacity(40, 8), 40);
    assert_eq!(Doubling.next_capacity(1, 0), 1);
}
