//! Centralized constants for the fixture generator
//!
//! Every value here feeds the golden outputs embedded in generated files.
//! Changing any of them (including reordering the axes) changes the sampled
//! matrices of every later case, so the checked-in fixtures must be
//! regenerated together with the change.

// ============================================================================
// GENERATOR SEEDING
// ============================================================================

/// Canonical seed for the shared sampler stream
pub const CANONICAL_SEED: u64 = 1234;

/// Exclusive upper bound of the self-check draw (a value in `0..=1024`)
pub const SELF_CHECK_BOUND: u32 = 1025;

/// Value the self-check draw must produce for the canonical seed
pub const SELF_CHECK_VALUE: u32 = 902;

/// Input matrix values are drawn from `0..INPUT_VALUE_RANGE`
pub const INPUT_VALUE_RANGE: u32 = 4;

// ============================================================================
// CASE AXES
// ============================================================================

/// Accumulator constants, outer enumeration axis
pub const ACC_CONSTANTS: [f32; 2] = [0.0, 0.5];

/// Shape triples `(m, n, k)`, inner enumeration axis
pub const SHAPES: [(usize, usize, usize); 2] = [(8, 8, 16), (8, 16, 16)];

// ============================================================================
// OUTPUT LAYOUT
// ============================================================================

/// Relative output directory for the generated shader tests
pub const OUTPUT_DIR: &str = "vulkan/shaders/vulkan-cmat-muladd-with-acc-constant";

/// Extension of generated files
pub const FILE_EXTENSION: &str = "vk_shader_test";

/// Workgroup width declared by the kernel (one subgroup)
pub const LOCAL_SIZE_X: usize = 32;

// ============================================================================
// EXACTNESS LIMITS
// ============================================================================

/// Largest magnitude up to which every integer is exact in an f64
pub const F64_EXACT_INTEGER_LIMIT: i64 = 1 << 53;
