use {
    crate::{error::ClientError, layout::FixedLayout, store::ProgramRef},
    borsh::{BorshDeserialize, BorshSerialize},
    solana_program::{
        instruction::{AccountMeta, Instruction},
        pubkey::Pubkey,
        sysvar,
    },
};

/// Direction of a roll, as the programs expect it on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollMode {
    /// Win if the roll lands at or under the threshold (wire value 1).
    Under,
    /// Win if the roll lands at or over the threshold (wire value 2).
    Over,
}

impl RollMode {
    pub fn as_byte(self) -> u8 {
        match self {
            RollMode::Under => 1,
            RollMode::Over => 2,
        }
    }

    pub fn from_byte(value: u8) -> Result<Self, ClientError> {
        match value {
            1 => Ok(RollMode::Under),
            2 => Ok(RollMode::Over),
            other => Err(ClientError::InvalidInput(format!(
                "roll mode must be 1 (roll under) or 2 (roll over), got {other}"
            ))),
        }
    }
}

/// Dice-roll payload: `[mode, threshold, bet]`, one byte each.
#[derive(BorshSerialize, BorshDeserialize, Debug, PartialEq)]
pub struct DiceRoll {
    pub mode: u8,
    pub threshold: u8,
    pub bet: u8,
}

impl DiceRoll {
    pub fn new(mode: RollMode, threshold: u8, bet: u8) -> Self {
        Self {
            mode: mode.as_byte(),
            threshold,
            bet,
        }
    }
}

impl FixedLayout for DiceRoll {
    const LEN: usize = 3;
    const NAME: &'static str = "dice roll payload";
}

/// Vote payload: mode and threshold bytes followed by a little-endian
/// u32 bet.
#[derive(BorshSerialize, BorshDeserialize, Debug, PartialEq)]
pub struct CheckedBet {
    pub mode: u8,
    pub threshold: u8,
    pub bet: u32,
}

impl CheckedBet {
    pub fn new(mode: RollMode, threshold: u8, bet: u32) -> Self {
        Self {
            mode: mode.as_byte(),
            threshold,
            bet,
        }
    }
}

impl FixedLayout for CheckedBet {
    const LEN: usize = 6;
    const NAME: &'static str = "vote payload";
}

/// Builds the dice-roll instruction.
///
/// Accounts expected by the program:
/// 0. `[writable]` Bank account holding the house money
pub fn roll(program: &ProgramRef, roll: &DiceRoll) -> Result<Instruction, ClientError> {
    Ok(Instruction {
        program_id: program.program_id,
        accounts: vec![AccountMeta::new(program.account_id, false)],
        data: roll.pack()?,
    })
}

/// Builds the vote instruction.
///
/// Accounts expected by the program:
/// 0. `[writable]` Prize-pool account
/// 1. `[writable]` Voter's check account (derived with seed)
/// 2. `[]` Rent sysvar
/// 3. `[signer]` Voter
pub fn vote(
    program: &ProgramRef,
    check_account: &Pubkey,
    voter: &Pubkey,
    bet: &CheckedBet,
) -> Result<Instruction, ClientError> {
    Ok(Instruction {
        program_id: program.program_id,
        accounts: vec![
            AccountMeta::new(program.account_id, false),
            AccountMeta::new(*check_account, false),
            AccountMeta::new_readonly(sysvar::rent::id(), false),
            AccountMeta::new_readonly(*voter, true),
        ],
        data: bet.pack()?,
    })
}
