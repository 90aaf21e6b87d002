// Handler benchmarks for the UTXO ledger.
//
// Covers single-transaction validation, epochs of independent spends at
// various sizes, and a same-epoch chain where each spend depends on the last.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use utxo_ledger::config::HandlerConfig;
use utxo_ledger::crypto::keys::Keypair;
use utxo_ledger::handler::{validate, TxHandler};
use utxo_ledger::transaction::{sign_all_inputs, Output, Transaction, TransactionBuilder, TxHash};
use utxo_ledger::utxo::{Utxo, UtxoPool};

fn funded_pool(owner: &Keypair, count: u32) -> UtxoPool {
    (0..count)
        .map(|i| (Utxo::new(TxHash::ZERO, i), Output::new(1_000, owner.public_key())))
        .collect()
}

fn spend(owner: &Keypair, prev: TxHash, index: u32, value: i64, to: &Keypair) -> Transaction {
    let mut tx = TransactionBuilder::new()
        .input(prev, index)
        .output(value, to.public_key())
        .build();
    sign_all_inputs(&mut tx, owner);
    tx
}

fn bench_validate_single(c: &mut Criterion) {
    let alice = Keypair::generate();
    let bob = Keypair::generate();
    let pool = funded_pool(&alice, 1);
    let config = HandlerConfig::default();
    let tx = spend(&alice, TxHash::ZERO, 0, 900, &bob);

    c.bench_function("handler/validate_single", |b| {
        b.iter(|| validate(&tx, &pool, &config).unwrap());
    });
}

fn bench_independent_epoch(c: &mut Criterion) {
    let mut group = c.benchmark_group("handler/independent_epoch");

    for size in [10u32, 100, 500] {
        let alice = Keypair::generate();
        let bob = Keypair::generate();
        let pool = funded_pool(&alice, size);
        let txs: Vec<_> = (0..size)
            .map(|i| spend(&alice, TxHash::ZERO, i, 1_000, &bob))
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txs, |b, txs| {
            b.iter(|| {
                let mut handler = TxHandler::new(pool.clone());
                handler.handle_txs(txs.iter().cloned())
            });
        });
    }

    group.finish();
}

fn bench_chained_epoch(c: &mut Criterion) {
    let mut group = c.benchmark_group("handler/chained_epoch");

    for depth in [10usize, 100] {
        let owners: Vec<_> = (0..=depth).map(|_| Keypair::generate()).collect();
        let pool = funded_pool(&owners[0], 1);

        let mut txs = Vec::with_capacity(depth);
        let mut prev = TxHash::ZERO;
        for step in 0..depth {
            let tx = spend(&owners[step], prev, 0, 1_000, &owners[step + 1]);
            prev = tx.hash();
            txs.push(tx);
        }

        group.throughput(Throughput::Elements(depth as u64));
        group.bench_with_input(BenchmarkId::from_parameter(depth), &txs, |b, txs| {
            b.iter(|| {
                let mut handler = TxHandler::new(pool.clone());
                handler.handle_txs(txs.iter().cloned())
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_validate_single,
    bench_independent_epoch,
    bench_chained_epoch,
);
criterion_main!(benches);
