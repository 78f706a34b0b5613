use anchor_lang::prelude::*;
use anchor_lang::system_program::{
    allocate, assign, create_account, transfer, Allocate, Assign, CreateAccount, Transfer,
};
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for whitelisting a batch of identities
 *
 * The recipient PDAs for the batch are passed as remaining accounts, one per
 * identity and in the same order: ["recipient", airdrop_key, identity].
 * Missing PDAs are created here with the owner paying rent.
 *
 * Access Control: Owner only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct AddToWhitelist<'info> {
    pub airdrop: Account<'info, AirdropConfig>,

    /// Pays rent for recipient PDAs created by this batch
    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Guard and shape checks for a whitelist batch, run before any account is
/// touched. The owner check comes first.
pub fn validate_whitelist_batch(
    airdrop: &AirdropConfig,
    caller: &Pubkey,
    identities: &[Pubkey],
    recipient_accounts: usize,
) -> Result<()> {
    airdrop.assert_owner(caller)?;
    require!(
        identities.len() <= MAX_WHITELIST_BATCH,
        AirdropError::WhitelistBatchTooLarge
    );
    require!(
        identities.len() == recipient_accounts,
        AirdropError::RecipientAccountMismatch
    );
    Ok(())
}

/// Checks `recipient` is the identity's recipient PDA and returns its bump.
pub fn verify_recipient_address(
    program_id: &Pubkey,
    airdrop_key: &Pubkey,
    identity: &Pubkey,
    recipient: &Pubkey,
) -> Result<u8> {
    let (expected, bump) = Pubkey::find_program_address(
        &[RECIPIENT_SEED.as_bytes(), airdrop_key.as_ref(), identity.as_ref()],
        program_id,
    );
    require_keys_eq!(*recipient, expected, AirdropError::RecipientAccountMismatch);
    Ok(bump)
}

/**
 * Sets the whitelist flag in a recipient account's data
 *
 * @param created_bump - Some(bump) when the account was just created and
 * holds no record yet, None when an existing record must be loaded
 *
 * Existing records keep their task counter and claim status.
 */
pub fn whitelist_recipient_account(
    program_id: &Pubkey,
    recipient_info: &AccountInfo,
    created_bump: Option<u8>,
) -> Result<()> {
    require_keys_eq!(
        *recipient_info.owner,
        *program_id,
        AirdropError::RecipientAccountMismatch
    );

    let mut recipient = match created_bump {
        Some(bump) => RecipientState {
            bump,
            ..RecipientState::default()
        },
        None => {
            let data = recipient_info.try_borrow_data()?;
            RecipientState::try_deserialize(&mut &data[..])?
        }
    };

    recipient.whitelist();

    let mut data = recipient_info.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data[..];
    recipient.try_serialize(&mut writer)?;
    Ok(())
}

/// Creates a recipient PDA the same way Anchor's `init` does: a plain
/// create_account when the address is unfunded, otherwise top up rent, then
/// allocate and assign so pre-funded addresses cannot block creation.
fn create_recipient_account<'info>(
    payer: AccountInfo<'info>,
    recipient_info: AccountInfo<'info>,
    system_program: AccountInfo<'info>,
    program_id: &Pubkey,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let rent = Rent::get()?;
    let space = RecipientState::LEN;
    let current_lamports = recipient_info.lamports();

    if current_lamports == 0 {
        return create_account(
            CpiContext::new_with_signer(
                system_program,
                CreateAccount {
                    from: payer,
                    to: recipient_info,
                },
                signer_seeds,
            ),
            rent.minimum_balance(space),
            space as u64,
            program_id,
        );
    }

    let required_lamports = rent
        .minimum_balance(space)
        .max(1)
        .saturating_sub(current_lamports);
    if required_lamports > 0 {
        transfer(
            CpiContext::new(
                system_program.clone(),
                Transfer {
                    from: payer,
                    to: recipient_info.clone(),
                },
            ),
            required_lamports,
        )?;
    }

    allocate(
        CpiContext::new_with_signer(
            system_program.clone(),
            Allocate {
                account_to_allocate: recipient_info.clone(),
            },
            signer_seeds,
        ),
        space as u64,
    )?;

    assign(
        CpiContext::new_with_signer(
            system_program,
            Assign {
                account_to_assign: recipient_info,
            },
            signer_seeds,
        ),
        program_id,
    )
}

pub fn handle_add_to_whitelist<'info>(
    ctx: Context<'_, '_, 'info, 'info, AddToWhitelist<'info>>,
    identities: Vec<Pubkey>,
) -> Result<()> {
    validate_whitelist_batch(
        &ctx.accounts.airdrop,
        &ctx.accounts.owner.key(),
        &identities,
        ctx.remaining_accounts.len(),
    )?;

    let airdrop_key = ctx.accounts.airdrop.key();

    for (identity, recipient_info) in identities.iter().zip(ctx.remaining_accounts.iter()) {
        let bump = verify_recipient_address(
            ctx.program_id,
            &airdrop_key,
            identity,
            &recipient_info.key(),
        )?;

        let created_bump = if recipient_info.data_is_empty() {
            let bump_seed = [bump];
            let seeds: &[&[u8]] = &[
                RECIPIENT_SEED.as_bytes(),
                airdrop_key.as_ref(),
                identity.as_ref(),
                &bump_seed,
            ];
            create_recipient_account(
                ctx.accounts.owner.to_account_info(),
                recipient_info.clone(),
                ctx.accounts.system_program.to_account_info(),
                ctx.program_id,
                &[seeds],
            )?;
            Some(bump)
        } else {
            None
        };

        whitelist_recipient_account(ctx.program_id, recipient_info, created_bump)?;

        emit_cpi!(Whitelisted {
            airdrop: airdrop_key,
            identity: *identity,
        });
    }

    msg!("add_to_whitelist: {} identities", identities.len());

    Ok(())
}
