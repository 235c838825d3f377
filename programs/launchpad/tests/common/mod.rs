//! Shared test context
//!
//! Runs the launchpad program in-process through `solana-program-test`, next
//! to the SPL Token and Associated Token programs bundled with the runtime.
#![allow(dead_code)]


use anchor_lang::prelude::*;
use anchor_lang::solana_program::{
    entrypoint::ProgramResult, instruction::Instruction, program_pack::Pack,
};
use anchor_spl::token::spl_token;
use launchpad::{
    error::LaunchpadError,
    state::{derive_participant_pda, derive_vault, Launchpad, Participant},
};
use solana_program_test::{processor, BanksClientError, ProgramTest, ProgramTestContext};
use solana_sdk::{
    instruction::InstructionError,
    signature::{Keypair, Signer},
    system_instruction,
    transaction::{Transaction, TransactionError},
};
use spl_associated_token_account::{
    get_associated_token_address, instruction::create_associated_token_account,
};

pub use builders::InstructionBuilder;

pub const DECIMALS: u8 = 9;
pub const UNIT: u64 = 1_000_000_000;
/// 2.1 payment tokens per launched token
pub const PRICE: u128 = 2_100_000_000_000_000_000;
pub const DEPOSIT: u64 = 500_000 * UNIT;
pub const WINDOW: i64 = 300_000;
pub const LAMPORTS: u64 = 10_000_000_000;

pub type TxResult = std::result::Result<(), BanksClientError>;

fn process_instruction(program_id: &Pubkey, accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    // Anchor's entry ties the account slice to the account lifetimes
    let accounts = Box::leak(Box::new(accounts.to_vec()));
    launchpad::entry(program_id, accounts, data)
}

/// Error code raised by the program for `error`.
pub fn code(error: LaunchpadError) -> u32 {
    error.into()
}

/// Assert the transaction failed with custom error `expected`, from either the
/// launchpad or a program it invoked.
pub fn assert_error(result: TxResult, expected: u32) {
    match result.expect_err("transaction should fail").unwrap() {
        TransactionError::InstructionError(_, InstructionError::Custom(code)) => {
            assert_eq!(code, expected)
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

pub struct LaunchpadTest {
    pub context: ProgramTestContext,
    pub operator: Keypair,
    pub launchpad: Pubkey,
    pub launched_mint: Pubkey,
    pub payment_mint: Pubkey,
}

impl LaunchpadTest {
    /// Fresh launchpad owned by a funded operator, with both mints created.
    pub async fn new() -> Self {
        let mut program_test = ProgramTest::default();
        program_test.prefer_bpf(false);
        program_test.add_program("launchpad", launchpad::ID, processor!(process_instruction));

        let context = program_test.start_with_context().await;
        let mut test = Self {
            context,
            operator: Keypair::new(),
            launchpad: Pubkey::default(),
            launched_mint: Pubkey::default(),
            payment_mint: Pubkey::default(),
        };

        let operator = test.operator.pubkey();
        test.airdrop(&operator).await;
        test.launched_mint = test.create_mint().await;
        test.payment_mint = test.create_mint().await;

        let (ix, launchpad) = InstructionBuilder::create_launchpad(&operator, 0);
        let operator = test.operator.insecure_clone();
        test.process(&[ix], &[&operator]).await.unwrap();
        test.launchpad = launchpad;
        test
    }

    /// Deposited and initialized, not started.
    pub async fn initialized() -> Self {
        let mut test = Self::new().await;
        test.deposit(DEPOSIT).await;
        test.initialize(&test.operator.insecure_clone()).await.unwrap();
        test
    }

    /// Started at the default price, closing `WINDOW` seconds from now.
    pub async fn started() -> Self {
        let mut test = Self::initialized().await;
        let end_time = test.now().await + WINDOW;
        test.start(&test.operator.insecure_clone(), end_time, PRICE)
            .await
            .unwrap();
        test
    }

    // ------------------------------------------------------------------------
    // Runtime
    // ------------------------------------------------------------------------

    pub async fn process(&mut self, instructions: &[Instruction], signers: &[&Keypair]) -> TxResult {
        let blockhash = self
            .context
            .get_new_latest_blockhash()
            .await
            .expect("blockhash");
        let mut keypairs: Vec<&Keypair> = vec![&self.context.payer];
        keypairs.extend_from_slice(signers);
        let transaction = Transaction::new_signed_with_payer(
            instructions,
            Some(&self.context.payer.pubkey()),
            &keypairs,
            blockhash,
        );
        self.context.banks_client.process_transaction(transaction).await
    }

    pub async fn now(&mut self) -> i64 {
        let clock: Clock = self.context.banks_client.get_sysvar().await.unwrap();
        clock.unix_timestamp
    }

    pub async fn warp_to(&mut self, unix_timestamp: i64) {
        let mut clock: Clock = self.context.banks_client.get_sysvar().await.unwrap();
        clock.unix_timestamp = unix_timestamp;
        self.context.set_sysvar(&clock);
    }

    pub async fn warp_past_end(&mut self) {
        let end_time = self.launchpad().await.end_time;
        self.warp_to(end_time).await;
    }

    pub async fn airdrop(&mut self, to: &Pubkey) {
        let ix = system_instruction::transfer(&self.context.payer.pubkey(), to, LAMPORTS);
        self.process(&[ix], &[]).await.unwrap();
    }

    /// Keypair holding enough lamports to pay rent for accounts it creates.
    pub async fn funded_keypair(&mut self) -> Keypair {
        let keypair = Keypair::new();
        self.airdrop(&keypair.pubkey()).await;
        keypair
    }

    // ------------------------------------------------------------------------
    // Tokens
    // ------------------------------------------------------------------------

    /// Legacy SPL mint with the test payer as mint authority.
    pub async fn create_mint(&mut self) -> Pubkey {
        let mint = Keypair::new();
        let payer = self.context.payer.pubkey();
        let rent = self.context.banks_client.get_rent().await.unwrap();
        let ixs = [
            system_instruction::create_account(
                &payer,
                &mint.pubkey(),
                rent.minimum_balance(spl_token::state::Mint::LEN),
                spl_token::state::Mint::LEN as u64,
                &spl_token::ID,
            ),
            spl_token::instruction::initialize_mint2(
                &spl_token::ID,
                &mint.pubkey(),
                &payer,
                None,
                DECIMALS,
            )
            .unwrap(),
        ];
        self.process(&ixs, &[&mint]).await.unwrap();
        mint.pubkey()
    }

    /// Associated token account of `owner`, created when missing.
    pub async fn token_account(&mut self, owner: &Pubkey, mint: &Pubkey) -> Pubkey {
        let address = get_associated_token_address(owner, mint);
        if self.account_exists(&address).await {
            return address;
        }
        let ix = create_associated_token_account(
            &self.context.payer.pubkey(),
            owner,
            mint,
            &spl_token::ID,
        );
        self.process(&[ix], &[]).await.unwrap();
        address
    }

    pub async fn mint_to(&mut self, mint: &Pubkey, account: &Pubkey, amount: u64) {
        let ix = spl_token::instruction::mint_to(
            &spl_token::ID,
            mint,
            account,
            &self.context.payer.pubkey(),
            &[],
            amount,
        )
        .unwrap();
        self.process(&[ix], &[]).await.unwrap();
    }

    /// Let the launchpad PDA spend up to `amount` from `owner`'s account.
    pub async fn approve(&mut self, owner: &Keypair, account: &Pubkey, amount: u64) {
        let ix = spl_token::instruction::approve(
            &spl_token::ID,
            account,
            &self.launchpad,
            &owner.pubkey(),
            &[],
            amount,
        )
        .unwrap();
        self.process(&[ix], &[owner]).await.unwrap();
    }

    pub async fn balance(&mut self, account: &Pubkey) -> u64 {
        let account = self
            .context
            .banks_client
            .get_account(*account)
            .await
            .unwrap()
            .expect("token account");
        spl_token::state::Account::unpack(&account.data).unwrap().amount
    }

    pub fn launched_vault(&self) -> Pubkey {
        derive_vault(&self.launchpad, &self.launched_mint, &spl_token::ID)
    }

    pub fn payment_vault(&self) -> Pubkey {
        derive_vault(&self.launchpad, &self.payment_mint, &spl_token::ID)
    }

    /// Operator transfer into the launched vault, creating the vault first.
    pub async fn deposit(&mut self, amount: u64) {
        let (launchpad, mint) = (self.launchpad, self.launched_mint);
        let vault = self.token_account(&launchpad, &mint).await;
        self.mint_to(&mint, &vault, amount).await;
    }

    // ------------------------------------------------------------------------
    // Accounts
    // ------------------------------------------------------------------------

    pub async fn account_exists(&mut self, address: &Pubkey) -> bool {
        self.context
            .banks_client
            .get_account(*address)
            .await
            .unwrap()
            .is_some()
    }

    pub async fn launchpad(&mut self) -> Launchpad {
        let account = self
            .context
            .banks_client
            .get_account(self.launchpad)
            .await
            .unwrap()
            .expect("launchpad account");
        Launchpad::try_deserialize(&mut account.data.as_ref()).unwrap()
    }

    pub async fn participant(&mut self, address: &Pubkey) -> Option<Participant> {
        let (pda, _) = derive_participant_pda(&self.launchpad, address, &launchpad::ID);
        self.context
            .banks_client
            .get_account(pda)
            .await
            .unwrap()
            .map(|account| Participant::try_deserialize(&mut account.data.as_ref()).unwrap())
    }

    pub async fn claim_of(&mut self, address: &Pubkey) -> u64 {
        self.participant(address).await.map_or(0, |p| p.claim)
    }

    // ------------------------------------------------------------------------
    // Instructions
    // ------------------------------------------------------------------------

    pub async fn initialize(&mut self, operator: &Keypair) -> TxResult {
        let ix = InstructionBuilder::initialize(
            &operator.pubkey(),
            &self.launchpad,
            &self.launched_mint,
            &self.payment_mint,
        );
        self.process(&[ix], &[operator]).await
    }

    pub async fn start(&mut self, operator: &Keypair, end_time: i64, price: u128) -> TxResult {
        let ix = InstructionBuilder::start(&operator.pubkey(), &self.launchpad, end_time, price);
        self.process(&[ix], &[operator]).await
    }

    pub async fn set_whitelist(&mut self, operator: &Keypair, address: &Pubkey, whitelisted: bool) -> TxResult {
        let ix = InstructionBuilder::set_whitelist(&operator.pubkey(), &self.launchpad, address, whitelisted);
        self.process(&[ix], &[operator]).await
    }

    pub async fn set_whitelist_many(
        &mut self,
        operator: &Keypair,
        addresses: &[Pubkey],
        whitelisted: bool,
    ) -> TxResult {
        let ix = InstructionBuilder::set_whitelist_many(
            &operator.pubkey(),
            &self.launchpad,
            addresses,
            whitelisted,
        );
        self.process(&[ix], &[operator]).await
    }

    /// Whitelisted buyer holding `funds` payment tokens, all approved to the
    /// launchpad. Returns the buyer and its payment-token account.
    pub async fn buyer(&mut self, funds: u64) -> (Keypair, Pubkey) {
        let buyer = Keypair::new();
        let operator = self.operator.insecure_clone();
        self.set_whitelist(&operator, &buyer.pubkey(), true)
            .await
            .unwrap();
        let account = self.funded_payer(&buyer, funds).await;
        (buyer, account)
    }

    /// Payment-token account of `owner` funded and approved for `funds`.
    pub async fn funded_payer(&mut self, owner: &Keypair, funds: u64) -> Pubkey {
        let mint = self.payment_mint;
        let account = self.token_account(&owner.pubkey(), &mint).await;
        self.mint_to(&mint, &account, funds).await;
        self.approve(owner, &account, funds).await;
        account
    }

    pub async fn purchase(
        &mut self,
        payer: &Keypair,
        payer_account: &Pubkey,
        beneficiary: &Pubkey,
        amount: u64,
    ) -> TxResult {
        let ix = InstructionBuilder::purchase(
            &payer.pubkey(),
            payer_account,
            &self.launchpad,
            &self.payment_mint,
            beneficiary,
            amount,
        );
        self.process(&[ix], &[payer]).await
    }

    /// Release `beneficiary`'s claim into its launched-token account.
    pub async fn release(&mut self, beneficiary: &Pubkey) -> TxResult {
        let mint = self.launched_mint;
        let destination = self.token_account(beneficiary, &mint).await;
        let ix = InstructionBuilder::release(&self.launchpad, &mint, beneficiary, &destination);
        self.process(&[ix], &[]).await
    }

    pub async fn release_many(&mut self, releases: &[(Pubkey, Pubkey)]) -> TxResult {
        let ix = InstructionBuilder::release_many(&self.launchpad, &self.launched_mint, releases);
        self.process(&[ix], &[]).await
    }

    pub async fn release_payments(&mut self, operator: &Keypair) -> TxResult {
        let mint = self.payment_mint;
        let destination = self.token_account(&operator.pubkey(), &mint).await;
        let ix = InstructionBuilder::release_payments(
            &operator.pubkey(),
            &destination,
            &self.launchpad,
            &mint,
        );
        self.process(&[ix], &[operator]).await
    }

    pub async fn release_unclaimed(&mut self, operator: &Keypair) -> TxResult {
        let mint = self.launched_mint;
        let destination = self.token_account(&operator.pubkey(), &mint).await;
        let ix = InstructionBuilder::release_unclaimed(
            &operator.pubkey(),
            &destination,
            &self.launchpad,
            &mint,
        );
        self.process(&[ix], &[operator]).await
    }
}
