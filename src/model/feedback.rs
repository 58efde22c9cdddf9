/// Celebration lines flashed when a round is fully solved.
/// Picked uniformly at random; repeats across rounds are fine.
pub const WIN_MESSAGES: &[&str] = &[
    "LET'S GO",
    "certified swiftie",
    "main character energy",
    "you ATE that",
    "flawless, no notes",
    "the bar AND the car",
    "ok lyrical genius",
    "scream it louder",
    "front row material",
    "HELL YEAH",
];

/// Taunts flashed after a wrong submission.
/// Drawn through the rotation sampler so none repeats until every taunt has
/// had its turn.
pub const LOSS_MESSAGES: &[&str] = &[
    "r u even a fan?",
    "that hurt to watch",
    "casual listener detected",
    "the answer was RIGHT THERE",
    "oof. just oof.",
    "shuffle-play exposed",
    "wrong era entirely",
    "this u on the radio?",
    "skill issue",
    "try the album booklet",
    "AW NO",
    "the vault is judging u",
    "deep breaths. try again.",
    "u call that a guess?",
    "grounds for streak forfeit",
];
