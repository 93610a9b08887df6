criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        exhausting_poker_selector,
        exhausting_poker_combinations,
        refilling_poker_hands,
        sampling_poker_ranking,
        sampling_music_tags,
        sampling_music_scale,
        tallying_poker_deck,
}

fn exhausting_poker_selector(c: &mut criterion::Criterion) {
    c.bench_function("exhaust all 52c5 Selector masks", |b| {
        b.iter(|| Selector::new(52, 5).unwrap().count())
    });
}

fn exhausting_poker_combinations(c: &mut criterion::Criterion) {
    let deck = Deck::new();
    c.bench_function("exhaust all 52c5 Combinations of the Deck", |b| {
        b.iter(|| Combinations::new(deck.items(), 5).unwrap().count())
    });
}

fn refilling_poker_hands(c: &mut criterion::Criterion) {
    let deck = Deck::new();
    c.bench_function("refill one buffer with every 52c5 hand", |b| {
        b.iter(|| {
            let mut hand = Vec::with_capacity(5);
            Selector::new(52, 5)
                .unwrap()
                .map(|mask| {
                    mask.pick_into(deck.items(), &mut hand);
                    hand.len()
                })
                .sum::<usize>()
        })
    });
}

fn sampling_poker_ranking(c: &mut criterion::Criterion) {
    let hand = (0..5).map(|_| Card::random()).collect::<Vec<Card>>();
    c.bench_function("rank a 5-card poker hand", |b| {
        b.iter(|| Evaluator::from(hand.as_slice()).find_ranking())
    });
}

fn sampling_music_tags(c: &mut criterion::Criterion) {
    let hand = (0..5).map(|_| Tone::random()).collect::<Vec<Tone>>();
    c.bench_function("tag a 5-tone musical hand", |b| {
        b.iter(|| Motif::from(hand.as_slice()).find_tags())
    });
}

fn sampling_music_scale(c: &mut criterion::Criterion) {
    let hand = Tone::parse("pF# vG gA fB dC").unwrap();
    c.bench_function("match a 5-tone hand against key signatures", |b| {
        b.iter(|| Scale::find(&hand))
    });
}

fn tallying_poker_deck(c: &mut criterion::Criterion) {
    let ranker = Ranker::new();
    c.bench_function("tally every 5-card poker hand", |b| {
        b.iter(|| Tally::new(&ranker, 5).unwrap().run().unwrap())
    });
}

use handcount::Arbitrary;
use handcount::classify::Tally;
use handcount::combinatorics::Combinations;
use handcount::combinatorics::Selector;
use handcount::domain::Domain;
use handcount::music::Motif;
use handcount::music::Scale;
use handcount::music::Tone;
use handcount::poker::Card;
use handcount::poker::Deck;
use handcount::poker::Evaluator;
use handcount::poker::Ranker;
