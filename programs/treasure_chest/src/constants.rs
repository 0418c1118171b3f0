use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * Fixed values used by the treasure chest program for address derivation
 * and client-side chest creation.
 */

/// ===== DERIVATION CONSTANTS =====

/// Number of chest identifier bytes used as the chest PDA seed
/// - Used in: [chest_identifier[..8]]
/// - The same bytes are stored in the chest account so its address can be
///   recomputed and so claimant records can be linked back to it
pub const CHEST_SEED_LEN: usize = 8;

/// Number of seed components of a claimant record PDA
/// - Used in: [claimant_wallet, chest_identifier]
pub const CLAIMANT_SEED_PARTS: usize = 2;

#[constant]
/// Upper bound on fresh identifiers tried when deriving a new chest address
/// - A chest seed whose every bump lands on the curve is discarded and a new
///   identifier is drawn, up to this many times
pub const MAX_CHEST_DERIVATION_ATTEMPTS: u8 = 16;
