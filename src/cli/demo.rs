//! Built-in Apollo 11 example.
//!
//! One reference summary and four candidates: an inaccurate one that swaps
//! the Moon for Mars, a correct paraphrase, an incomplete one and an
//! irrelevant one.

use crate::error::Result;
use crate::scoring::CandidateSet;

pub const APOLLO_REFERENCE: &str = "The Apollo 11 mission's primary purpose was to achieve the national goal \
of landing humans on the Moon and returning them safely to Earth. Key outcomes \
included astronauts Neil Armstrong and Buzz Aldrin collecting the first lunar \
samples, deploying scientific experiments on the lunar surface, and demonstrating \
U.S. technological supremacy during the Cold War.";

pub const APOLLO_CANDIDATES: [(&str, &str); 4] = [
    (
        "A (inaccurate)",
        "The Apollo 11 mission's primary purpose was to land humans on Mars. \
Key outcomes included astronauts Neil Armstrong and Buzz Aldrin collecting \
the first Martian samples and deploying scientific experiments on the Martian surface.",
    ),
    (
        "B (correct paraphrase)",
        "The main goal of Apollo 11 was to successfully land a crew on the Moon \
and ensure their safe return. During the mission, the astronauts gathered \
moon rocks and set up science equipment, which was a major victory for \
the U.S. in the Cold War.",
    ),
    (
        "C (incomplete)",
        "The Apollo 11 mission landed Neil Armstrong and Buzz Aldrin on the Moon.",
    ),
    (
        "D (irrelevant)",
        "The Apollo 11 mission was a landmark achievement in aeronautics, leading \
to significant advancements in aircraft design and commercial airline safety \
protocols that are still in use today.",
    ),
];

/// The Apollo candidates as a [`CandidateSet`], in A..D order.
pub fn apollo_candidates() -> Result<CandidateSet> {
    CandidateSet::from_pairs(APOLLO_CANDIDATES)
}
