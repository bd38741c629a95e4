use assert_matches::assert_matches;
use futures_util::future::join_all;
use idlemon::{
    Gender,
    ShopCategory,
    Stat,
    StatTable,
    config::EngineOptions,
    error::{
        GeneralError,
        InvalidCaptureInputError,
        NotFoundError,
    },
    mons::Nature,
};
use idlemon_service::{
    GameService,
    GameServiceOptions,
    WildMon,
};
use idlemon_test_utils::{
    ControlledRandomNumberGenerator,
    TestDataStore,
    assert_error_message,
};
use pretty_assertions::assert_eq;
use uuid::Uuid;

const POKE_BALL: u32 = 4;
const SUPER_BALL: u32 = 3;
const POTION: u32 = 17;

const POKE_BALL_ENTRY: u32 = 1;
const SUPER_BALL_ENTRY: u32 = 2;
const POTION_ENTRY: u32 = 3;
const MASTER_BALL_ENTRY: u32 = 4;

fn data() -> TestDataStore {
    TestDataStore::new().unwrap()
}

fn options(initial_pokedollars: u32) -> GameServiceOptions {
    GameServiceOptions {
        seed: Some(0),
        initial_pokedollars,
        ..Default::default()
    }
}

/// A service whose first rolls are the given values.
fn controlled_service<'d>(
    data: &'d TestDataStore,
    options: GameServiceOptions,
    rolls: &[u64],
) -> GameService<'d> {
    let mut rng = ControlledRandomNumberGenerator::new(Some(0));
    rng.insert_fake_values(
        rolls
            .iter()
            .enumerate()
            .map(|(i, value)| (i + 1, *value)),
    );
    GameService::new_with_rng(data, options, Box::new(rng))
}

fn wild_pikachu(current_hp: i32) -> WildMon {
    WildMon {
        pokedex_id: 25,
        level: Some(5),
        current_hp,
        max_hp: 20,
        ivs: Some(Stat::ALL.into_iter().map(|stat| (stat, 31)).collect()),
        nature: Some("Adamant".to_owned()),
        gender: Some("female".to_owned()),
        base_stats: None,
    }
}

async fn account_with_balls(service: &GameService<'_>, balls: u32) -> Uuid {
    let account = service.create_account("red").await.unwrap();
    service
        .buy_item(account, POKE_BALL_ENTRY, balls)
        .await
        .unwrap();
    account
}

#[tokio::test]
async fn creates_account() {
    let data = data();
    let service = GameService::new(&data, options(0));
    let account = service.create_account("red").await.unwrap();
    let view = service.account(account).await.unwrap();
    assert_eq!(view.id, account);
    assert_eq!(view.nickname, "red");
    assert_eq!(view.pokedollars, 0);
    assert!(!view.starter_chosen);
    assert_eq!(view.team_size, 0);
}

#[tokio::test]
async fn unknown_account_is_not_found() {
    let data = data();
    let service = GameService::new(&data, options(0));
    assert_matches!(
        service.account(Uuid::new_v4()).await.unwrap_err().downcast::<NotFoundError>(),
        Ok(_)
    );
}

#[tokio::test]
async fn chooses_starter_with_rewards() {
    let data = data();
    let service = GameService::new(&data, options(0));
    let account = service.create_account("red").await.unwrap();
    let response = service.choose_starter(account, 4).await.unwrap();
    assert_eq!(response.message, "You chose Charmander!");
    assert_eq!(response.pokedollars, 10000);
    assert_eq!(response.mon.mon.species(), 4);
    assert_eq!(response.mon.mon.level(), 5);
    assert_eq!(response.mon.mon.nickname.as_deref(), Some("Charmander"));
    assert!(response.mon.mon.active);
    assert_eq!(response.mon.mon.slot, 1);
    assert!(!response.mon.mon.shiny());
    assert_eq!(
        response
            .mon
            .mon
            .moves
            .iter()
            .map(|slot| slot.name.as_str())
            .collect::<Vec<_>>(),
        vec!["ember", "scratch", "growl"]
    );

    let items = service
        .items(account)
        .await
        .unwrap()
        .into_iter()
        .map(|item| (item.item.name, item.quantity))
        .collect::<Vec<_>>();
    assert_eq!(
        items,
        vec![
            ("Super Ball".to_owned(), 10),
            ("Poke Ball".to_owned(), 10),
            ("Poción".to_owned(), 5),
        ]
    );
    assert!(service.account(account).await.unwrap().starter_chosen);
}

#[tokio::test]
async fn cannot_choose_starter_twice() {
    let data = data();
    let service = GameService::new(&data, options(0));
    let account = service.create_account("red").await.unwrap();
    service.choose_starter(account, 1).await.unwrap();
    assert_error_message(
        service.choose_starter(account, 7).await,
        "starter was already chosen",
    );
    assert_eq!(service.mons(account, None).await.unwrap().len(), 1);
}

#[tokio::test]
async fn unknown_starter_is_not_found() {
    let data = data();
    let service = GameService::new(&data, options(0));
    let account = service.create_account("red").await.unwrap();
    assert_matches!(
        service.choose_starter(account, 999).await.unwrap_err().downcast::<NotFoundError>(),
        Ok(err) => assert_eq!(err.to_string(), "species 999 not found")
    );
    assert!(!service.account(account).await.unwrap().starter_chosen);
}

#[tokio::test]
async fn skips_missing_starter_items() {
    let data = data();
    let service = GameService::new(
        &data,
        GameServiceOptions {
            starter_items: vec![("Missing Ball".to_owned(), 1), ("poke ball".to_owned(), 2)],
            ..options(0)
        },
    );
    let account = service.create_account("red").await.unwrap();
    service.choose_starter(account, 7).await.unwrap();
    let items = service
        .items(account)
        .await
        .unwrap()
        .into_iter()
        .map(|item| (item.item.id, item.quantity))
        .collect::<Vec<_>>();
    assert_eq!(items, vec![(POKE_BALL, 2)]);
}

#[tokio::test]
async fn captures_wild_mon_with_its_properties() {
    let data = data();
    // Capture roll, then shiny roll.
    let service = controlled_service(&data, options(1000), &[0, 5]);
    let account = account_with_balls(&service, 2).await;
    let response = service
        .throw_ball(account, POKE_BALL, wild_pikachu(7))
        .await
        .unwrap();
    assert!(response.captured);
    assert_eq!(response.message, "Gotcha! Pikachu was caught!");
    assert_eq!(response.balls_left, 1);
    let mon = response.mon.unwrap();
    assert_eq!(mon.nickname, "Pikachu");
    assert_eq!(mon.level, 5);
    assert_eq!(mon.gender, Gender::Female);
    assert_eq!(mon.nature, Nature::Adamant);
    assert_eq!(mon.ivs, StatTable::uniform(31));
    assert_eq!(
        mon.stats,
        StatTable {
            hp: 20,
            atk: 13,
            def: 10,
            spa: 9,
            spd: 11,
            spe: 15,
        }
    );
    assert_eq!(mon.current_hp, 7);
    assert!(!mon.shiny);
    assert!(mon.active);
    assert_eq!(mon.slot, 1);
}

#[tokio::test]
async fn current_hp_of_captured_mon_is_capped() {
    let data = data();
    let service = controlled_service(&data, options(1000), &[0, 5]);
    let account = account_with_balls(&service, 1).await;
    let mut wild = wild_pikachu(20);
    wild.max_hp = 60;
    wild.current_hp = 45;
    let mon = service
        .throw_ball(account, POKE_BALL, wild)
        .await
        .unwrap()
        .mon
        .unwrap();
    assert_eq!(mon.stats.hp, 20);
    assert_eq!(mon.current_hp, 20);
}

#[tokio::test]
async fn failed_capture_consumes_ball() {
    let data = data();
    let service = controlled_service(&data, options(1000), &[255]);
    let account = account_with_balls(&service, 1).await;
    let response = service
        .throw_ball(account, POKE_BALL, wild_pikachu(20))
        .await
        .unwrap();
    assert!(!response.captured);
    assert_eq!(response.message, "Oh no! The wild Pikachu broke free!");
    assert_eq!(response.mon, None);
    assert_eq!(response.balls_left, 0);
    assert!(service.mons(account, None).await.unwrap().is_empty());
    assert_error_message(
        service
            .throw_ball(account, POKE_BALL, wild_pikachu(20))
            .await,
        "no Poke Ball left",
    );
}

#[tokio::test]
async fn invalid_capture_keeps_ball() {
    let data = data();
    let service = controlled_service(&data, options(1000), &[0]);
    let account = account_with_balls(&service, 1).await;
    let mut wild = wild_pikachu(0);
    wild.max_hp = 0;
    assert_matches!(
        service
            .throw_ball(account, POKE_BALL, wild)
            .await
            .unwrap_err()
            .downcast::<InvalidCaptureInputError>(),
        Ok(_)
    );
    let inventory = service.items(account).await.unwrap();
    assert_eq!(inventory[0].quantity, 1);
}

#[tokio::test]
async fn only_balls_can_be_thrown() {
    let data = data();
    let service = GameService::new(&data, options(1000));
    let account = service.create_account("red").await.unwrap();
    service.buy_item(account, POTION_ENTRY, 1).await.unwrap();
    assert_matches!(
        service
            .throw_ball(account, POTION, wild_pikachu(20))
            .await
            .unwrap_err()
            .downcast::<GeneralError>(),
        Ok(err) => assert_eq!(err.to_string(), "Poción is not a ball")
    );
    assert_eq!(service.items(account).await.unwrap()[0].quantity, 1);
}

#[tokio::test]
async fn captured_mon_goes_to_box_when_team_is_full() {
    let data = data();
    let service = controlled_service(
        &data,
        GameServiceOptions {
            max_team_size: 1,
            ..options(0)
        },
        // The starter rolls gender, six individual values, and nature. Then the capture roll and the
        // shiny roll follow.
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 5],
    );
    let account = service.create_account("red").await.unwrap();
    service.choose_starter(account, 4).await.unwrap();
    let response = service
        .throw_ball(account, SUPER_BALL, wild_pikachu(1))
        .await
        .unwrap();
    assert!(response.captured);
    let mon = response.mon.unwrap();
    assert!(!mon.active);
    assert_eq!(mon.slot, 0);
    assert_eq!(mon.slot_pc, 1);

    let view = service.account(account).await.unwrap();
    assert_eq!(view.team_size, 1);
    assert_eq!(view.box_size, 1);

    service.swap(account, 1, mon.id).await.unwrap();
    let team = service.mons(account, Some(true)).await.unwrap();
    assert_eq!(team.len(), 1);
    assert_eq!(team[0].id, mon.id);
    assert_eq!(team[0].mon.slot, 1);
    let boxed = service.mons(account, Some(false)).await.unwrap();
    assert_eq!(boxed[0].id, 1);
    assert_eq!(boxed[0].mon.slot_pc, 1);
}

#[tokio::test]
async fn levels_up_mon() {
    let data = data();
    let service = GameService::new(&data, options(0));
    let account = service.create_account("red").await.unwrap();
    let starter = service.choose_starter(account, 4).await.unwrap().mon;
    let response = service.level_up(account, starter.id).await.unwrap();
    assert_eq!(response.message, "Charmander grew to level 6!");
    assert_eq!(response.level, 6);
    assert!(response.stats.hp >= starter.mon.stats().hp);
    // Leveling up does not heal.
    assert_eq!(response.current_hp, starter.mon.current_hp());
    assert_matches!(
        service.level_up(account, 99).await.unwrap_err().downcast::<NotFoundError>(),
        Ok(_)
    );
}

#[tokio::test]
async fn cannot_level_up_past_max_level() {
    let data = data();
    let service = GameService::new(
        &data,
        GameServiceOptions {
            engine: EngineOptions {
                starting_level: 5,
                max_level: 6,
                ..Default::default()
            },
            ..options(0)
        },
    );
    let account = service.create_account("red").await.unwrap();
    let starter = service.choose_starter(account, 4).await.unwrap().mon;
    service.level_up(account, starter.id).await.unwrap();
    assert_error_message(
        service.level_up(account, starter.id).await,
        "mon is already at the max level of 6",
    );
}

#[tokio::test]
async fn heals_mon_with_potion() {
    let data = data();
    let service = controlled_service(&data, options(1000), &[0, 5]);
    let account = account_with_balls(&service, 1).await;
    service.buy_item(account, POTION_ENTRY, 1).await.unwrap();
    let mon = service
        .throw_ball(account, POKE_BALL, wild_pikachu(7))
        .await
        .unwrap()
        .mon
        .unwrap();

    let response = service.use_item(account, mon.id, POTION).await.unwrap();
    assert_eq!(response.message, "Pikachu recovered 13 HP");
    assert_eq!(response.healed, 13);
    assert_eq!(response.current_hp, 20);
    assert_eq!(response.max_hp, 20);
    assert_eq!(response.remaining, 0);
    assert_error_message(
        service.use_item(account, mon.id, POTION).await,
        "no Poción left",
    );
}

#[tokio::test]
async fn full_hp_mon_consumes_nothing() {
    let data = data();
    let service = GameService::new(&data, options(0));
    let account = service.create_account("red").await.unwrap();
    let starter = service.choose_starter(account, 4).await.unwrap().mon;
    let response = service.use_item(account, starter.id, POTION).await.unwrap();
    assert_eq!(response.message, "Charmander already has full HP");
    assert_eq!(response.healed, 0);
    assert_eq!(response.remaining, 5);
    assert_error_message(
        service.use_item(account, starter.id, POKE_BALL).await,
        "Poke Ball cannot be used on a mon",
    );
}

#[tokio::test]
async fn buys_discounted_items() {
    let data = data();
    let service = GameService::new(&data, options(2000));
    let account = service.create_account("red").await.unwrap();
    let response = service
        .buy_item(account, SUPER_BALL_ENTRY, 3)
        .await
        .unwrap();
    assert_eq!(response.total_cost, 1620);
    assert_eq!(response.pokedollars, 380);
    assert_eq!(response.quantity, 3);
    assert_error_message(
        service.buy_item(account, POKE_BALL_ENTRY, 2).await,
        "400 pokédollars needed, but only 380 available",
    );
    assert_eq!(service.account(account).await.unwrap().pokedollars, 380);
}

#[tokio::test]
async fn rejects_invalid_purchases() {
    let data = data();
    let service = GameService::new(&data, options(100000));
    let account = service.create_account("red").await.unwrap();
    assert_error_message(
        service.buy_item(account, POKE_BALL_ENTRY, 0).await,
        "quantity must be positive",
    );
    assert_error_message(
        service.buy_item(account, MASTER_BALL_ENTRY, 1).await,
        "item is not for sale",
    );
    assert_matches!(
        service.buy_item(account, 99, 1).await.unwrap_err().downcast::<NotFoundError>(),
        Ok(_)
    );
    assert!(service.items(account).await.unwrap().is_empty());
}

#[tokio::test]
async fn limited_stock_runs_out() {
    let data = data();
    let service = GameService::new(&data, options(100000));
    let account = service.create_account("red").await.unwrap();
    assert_error_message(
        service.buy_item(account, POTION_ENTRY, 21).await,
        "only 20 Poción left in stock",
    );
    service.buy_item(account, POTION_ENTRY, 5).await.unwrap();

    let healing = service
        .shop_items(Some(ShopCategory::Healing))
        .await
        .unwrap();
    assert_eq!(healing.len(), 1);
    assert_eq!(healing[0].entry.stock, 15);
    assert_eq!(healing[0].price, 300);

    service.buy_item(account, POTION_ENTRY, 15).await.unwrap();
    assert_error_message(
        service.buy_item(account, POTION_ENTRY, 1).await,
        "only 0 Poción left in stock",
    );
}

#[tokio::test]
async fn unlimited_stock_never_decreases() {
    let data = data();
    let service = GameService::new(&data, options(100000));
    let account = service.create_account("red").await.unwrap();
    service.buy_item(account, POKE_BALL_ENTRY, 50).await.unwrap();
    let shop = service.shop_items(None).await.unwrap();
    assert_eq!(
        shop.iter()
            .map(|item| (item.entry.id, item.entry.stock, item.price))
            .collect::<Vec<_>>(),
        vec![(1, 9999, 200), (2, 9999, 540), (3, 20, 300)]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_purchases_do_not_overspend() {
    let data = data();
    let service = GameService::new(&data, options(1000));
    let account = service.create_account("red").await.unwrap();
    let results = join_all((0..10).map(|_| service.buy_item(account, POKE_BALL_ENTRY, 1))).await;
    assert_eq!(results.iter().filter(|result| result.is_ok()).count(), 5);
    let view = service.account(account).await.unwrap();
    assert_eq!(view.pokedollars, 0);
    assert_eq!(service.items(account).await.unwrap()[0].quantity, 5);
}
