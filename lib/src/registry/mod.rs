/*!
# Record Store

Leases string keys against an escrowed payment.

## Architecture

```text
RecordStore           ← lifecycle rules, escrow movement, events
    ├── RecordRepository  ← storage I/O (persistent records, instance config)
    └── FeeOracleClient   ← pricing, behind the `FeeOracle` contract interface
```

## Lifecycle

```text
Unregistered ──register──▶ Active ──(time)──▶ Expired ──clear_expired──▶ Unregistered
                             │  ▲                │
                             └──┘ renew          └──register (refunds prior owner)
```

## Storage keys

| Key | Tier | Description |
|---|---|---|
| `Record(label)` | Persistent | Full `Record` struct |
| `FeeOracle` | Instance | Oracle contract address |
| `PaymentToken` | Instance | Escrow token address |
| `RenewThreshold` | Instance | Renewal window in seconds |
*/

pub mod manager;
pub mod repository;
pub mod types;


pub use manager::RecordStore;
pub use types::{Record, RecordState};
