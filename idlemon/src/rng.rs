pub use idlemon_prng::{
    LcgRandomSource,
    RandomSource,
    default_random_source,
    rand_util,
};
