use std::thread;

use technique_content::ScriptLoader;
use technique_core::{
    Advisory, BuilderConfig, Catalog, DamageSpec, DeliveryType, ReductionId, SpecialEffect, Tier,
};
use technique_runtime::{BuilderEvent, Runtime, RuntimeConfig};

fn tier(value: u8) -> Option<Tier> {
    Tier::new(value).ok()
}

#[test]
fn actions_publish_recalculated_balances() {
    let runtime = Runtime::builder().build();
    let handle = runtime.handle();
    let mut events = runtime.subscribe_events();

    handle.set_tier(tier(4)).unwrap();
    handle.set_delivery_type(Some(DeliveryType::Ability)).unwrap();
    handle.set_damage(Some(DamageSpec::single(5))).unwrap();
    let balance = handle.add_effect(SpecialEffect::SiegeAttack, 1).unwrap();
    assert_eq!(balance.points_spent, 7);
    assert_eq!(balance.points_available, 2);

    let actions: Vec<_> = std::iter::from_fn(|| events.try_recv().ok())
        .map(|event| match event {
            BuilderEvent::Recalculated { action, .. } => action,
            BuilderEvent::Reset => "reset".to_owned(),
        })
        .collect();
    assert_eq!(actions, ["set_tier", "set_delivery_type", "set_damage", "add_effect"]);

    handle.reset().unwrap();
    assert_eq!(events.try_recv().unwrap(), BuilderEvent::Reset);
    assert_eq!(handle.snapshot().unwrap().tier(), None);
}

#[test]
fn last_event_matches_snapshot() {
    let runtime = Runtime::builder().build();
    let handle = runtime.handle();
    let mut events = handle.subscribe();

    handle.set_tier(tier(3)).unwrap();
    handle.update_reduction(ReductionId::Exhausting, 1).unwrap();
    handle.update_reduction(ReductionId::SlowTechnique, 1).unwrap();

    let mut last = None;
    while let Ok(event) = events.try_recv() {
        last = Some(event);
    }
    let snapshot = handle.snapshot().unwrap();
    assert_eq!(
        last,
        Some(BuilderEvent::Recalculated {
            action: "update_reduction".to_owned(),
            balance: *snapshot.balance(),
        })
    );
    assert!(snapshot.reduction_cap_exceeded());
    assert!(!handle.can_add_reduction(ReductionId::ReduceArea).unwrap());
    assert!(handle.can_set_reduction_magnitude(ReductionId::Exhausting, 0).unwrap());
    assert!(
        handle
            .advisories()
            .unwrap()
            .contains(&Advisory::ReductionCapExceeded { raw: -7, cap: -3 })
    );
}

#[test]
fn concurrent_callers_share_one_consistent_store() {
    let runtime = Runtime::builder().build();
    let handle = runtime.handle();
    handle.set_tier(tier(7)).unwrap();

    let workers: Vec<_> = [
        SpecialEffect::IncreaseRange,
        SpecialEffect::IncreaseArea,
        SpecialEffect::AddHealing,
        SpecialEffect::AddTemporaryHp,
    ]
    .into_iter()
    .map(|effect| {
        let handle = handle.clone();
        thread::spawn(move || {
            for magnitude in 1..=5 {
                handle.update_effect(effect, magnitude).unwrap();
            }
        })
    })
    .collect();
    for worker in workers {
        worker.join().unwrap();
    }

    let snapshot = handle.snapshot().unwrap();
    assert_eq!(snapshot.effects().len(), 4);
    assert_eq!(snapshot.points_spent(), 4 * 5);
    assert_eq!(snapshot.points_available(), 20 - 20);
}

#[test]
fn configuration_and_catalog_are_injected() {
    let mut catalog = Catalog::builtin();
    catalog.conditions = technique_core::ConditionTable::from_definitions([]).unwrap();

    let config = RuntimeConfig {
        builder_config: BuilderConfig::default().with_dice_unit_cost(2),
        ..RuntimeConfig::default()
    };
    let runtime = Runtime::builder().config(config).catalog(catalog).build();
    let handle = runtime.handle();

    handle.set_tier(tier(2)).unwrap();
    handle.set_damage(Some(DamageSpec::multi(3))).unwrap();
    let balance = handle
        .update_effect(technique_core::Condition::Paralyzed, 1)
        .unwrap();
    assert_eq!(balance.points_spent, 6);
}

#[test]
fn replays_a_command_script() {
    let commands = ScriptLoader::parse(
        r#"[
            SetTier(Some(5)),
            SetDeliveryType(Some("combate")),
            SetRange(Some("esfera")),
            SetDamage(Some(SingleTarget(dice: 6))),
            AddEffect(id: "aumentar-dano", magnitude: 2),
            UpdateEffect(id: "adicionar-critico-19-20", magnitude: 1),
            UpdateEffect(id: "adicionar-critico-18-20", magnitude: 1),
            AddReduction(id: "reduzir-area", magnitude: 2),
        ]"#,
    )
    .unwrap();

    let runtime = Runtime::builder().build();
    let handle = runtime.handle();
    let balance = handle.execute_all(commands).unwrap();

    // 6 dice + damage 5 + critical 18-20 3 - area 2 - combat 3
    assert_eq!(balance.points_spent, 9);
    assert_eq!(balance.points_available, 3);

    let summary = handle.summary("Golpe").unwrap();
    assert_eq!(summary.effects.len(), 2);
    assert_eq!(summary.range_detail.as_deref(), Some("Até 7.5m de raio"));
}
