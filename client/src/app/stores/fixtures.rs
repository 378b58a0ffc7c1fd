//! Sample records for store tests.

use chrono::{TimeZone, Utc};
use shared::dto::{
    DocumentType, KycRequest, KycStatus, LiquidityPool, Page, Pagination, PoolStatus, PoolToken, TokenPair,
    Transaction, TransactionStatus, TransactionType, User, UserRole, UserStatus, Wallet,
};

fn at(day: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap()
}

pub(crate) fn page<T>(items: Vec<T>) -> Page<T> {
    let total = items.len() as u64;
    Page {
        items,
        pagination: Pagination {
            page: 1,
            limit: 10,
            total,
        },
    }
}

pub(crate) fn user(id: &str, status: UserStatus) -> User {
    User {
        id: id.to_string(),
        email: format!("{id}@example.com"),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        phone: None,
        role: UserRole::User,
        status,
        kyc_status: KycStatus::Pending,
        wallet_address: None,
        created_at: at(1),
        updated_at: at(2),
    }
}

pub(crate) fn wallet(id: &str, active: bool) -> Wallet {
    Wallet {
        id: id.to_string(),
        user_id: "u1".to_string(),
        address: "0x52908400098527886E0F7030069857D2E4169EE7".to_string(),
        network: "ethereum".to_string(),
        balance: "1.5".to_string(),
        currency: "ETH".to_string(),
        tokens: Vec::new(),
        is_active: active,
        created_at: at(3),
    }
}

pub(crate) fn transaction(id: &str, status: TransactionStatus) -> Transaction {
    Transaction {
        id: id.to_string(),
        hash: None,
        user_id: "u1".to_string(),
        from_address: "0x52908400098527886E0F7030069857D2E4169EE7".to_string(),
        to_address: "0x8617E340B3D01FA5F11F306F4090FD50E238070D".to_string(),
        amount: "0.25".to_string(),
        token: "ETH".to_string(),
        network: "ethereum".to_string(),
        tx_type: TransactionType::Transfer,
        status,
        fee: None,
        created_at: at(4),
        confirmed_at: None,
    }
}

pub(crate) fn kyc_request(id: &str, status: KycStatus) -> KycRequest {
    KycRequest {
        id: id.to_string(),
        user_id: "u1".to_string(),
        user: None,
        document_type: DocumentType::Passport,
        documents: Vec::new(),
        status,
        submitted_at: at(5),
        reviewed_at: None,
        reviewer_id: None,
        rejection_reason: None,
    }
}

pub(crate) fn pool(id: &str, status: PoolStatus) -> LiquidityPool {
    let token = |symbol: &str, decimals| PoolToken {
        symbol: symbol.to_string(),
        address: format!("0x{symbol}"),
        decimals,
    };
    LiquidityPool {
        id: id.to_string(),
        name: "ETH/USDC".to_string(),
        token_pair: TokenPair {
            token0: token("ETH", 18),
            token1: token("USDC", 6),
        },
        tvl: 1_250_000.0,
        apy: 12.5,
        volume_24h: 80_000.0,
        fees_24h: 240.0,
        network: "ethereum".to_string(),
        status,
        created_at: at(6),
    }
}
