#[cfg(test)]
mod tests {
    use glam::Vec3;
    use hecs::Entity;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use bossrush_ai::profiles::{boss_profile, minion_profile, EnemyProfile};
    use bossrush_arena::Arena;
    use bossrush_core::commands::{MoveKeys, PlayerCommand};
    use bossrush_core::components::{Enemy, Gunner, Transform};
    use bossrush_core::constants::*;
    use bossrush_core::enums::*;
    use bossrush_core::events::PresentationEvent;
    use bossrush_core::state::GameStateSnapshot;
    use bossrush_core::weapons::{weapon_def, WeaponDef};

    use crate::engine::{SimConfig, SimulationEngine};
    use crate::player::{InputState, PlayerState};
    use crate::systems::{hitscan, movement, wave_director};
    use crate::wave::WaveState;
    use crate::weapon::{FireOutcome, WeaponState};
    use crate::world_setup;

    fn open_arena() -> Arena {
        Arena::open(MAP_HALF)
    }

    fn count_events(snap: &GameStateSnapshot, pred: impl Fn(&PresentationEvent) -> bool) -> usize {
        snap.events.iter().filter(|e| pred(e)).count()
    }

    fn is_fired(e: &PresentationEvent) -> bool {
        matches!(e, PresentationEvent::Fired { .. })
    }

    fn bosses(engine: &SimulationEngine) -> Vec<Entity> {
        engine
            .world()
            .query::<&Enemy>()
            .iter()
            .filter(|(_, e)| e.archetype == EnemyArchetype::Boss)
            .map(|(entity, _)| entity)
            .collect()
    }

    fn check_ammo_bounds(w: &WeaponState) {
        let def = w.def();
        assert!(w.ammo_in_mag <= def.mag_size, "mag {} > {}", w.ammo_in_mag, def.mag_size);
        assert!(w.reserve <= def.reserve_max, "reserve {} > {}", w.reserve, def.reserve_max);
    }

    // --- Weapon state ---

    #[test]
    fn test_ammo_bounds_under_random_play() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut w = WeaponState::default();
        for _ in 0..20_000 {
            match rng.gen_range(0..10) {
                0 => {
                    w.request_reload();
                }
                1 => w.switch_weapon(WeaponId::ALL[rng.gen_range(0..3)]),
                2..=5 => {
                    w.try_fire();
                }
                _ => {
                    let dt = rng.gen_range(0.0..0.2);
                    w.tick(dt, rng.gen_bool(0.5));
                }
            }
            check_ammo_bounds(&w);
            assert!(w.reload_remaining >= 0.0);
        }
    }

    #[test]
    fn test_empty_mag_fire_starts_reload() {
        let mut w = WeaponState::new(WeaponId::Magnum);
        w.ammo_in_mag = 0;
        assert_eq!(w.try_fire(), FireOutcome::ReloadStarted);
        assert_eq!(w.ammo_in_mag, 0);
        assert!(w.reloading);
        assert!((w.reload_remaining - 2.4).abs() < 1e-6);
        // Further pulls are ignored while reloading.
        assert_eq!(w.try_fire(), FireOutcome::Blocked);
        assert_eq!(w.ammo_in_mag, 0);
    }

    #[test]
    fn test_empty_mag_no_reserve_is_blocked() {
        let mut w = WeaponState::new(WeaponId::Ak);
        w.ammo_in_mag = 0;
        w.reserve = 0;
        assert_eq!(w.try_fire(), FireOutcome::Blocked);
        assert!(!w.reloading);
    }

    #[test]
    fn test_reload_transfer_arithmetic() {
        let mut w = WeaponState::new(WeaponId::Ak);
        w.ammo_in_mag = 10;
        w.reserve = 5;
        assert!(w.request_reload());
        assert!(!w.tick(2.0, false));
        assert!(w.tick(0.25, false));
        assert_eq!(w.ammo_in_mag, 15);
        assert_eq!(w.reserve, 0);
        assert!(!w.reloading);

        let mut w = WeaponState::new(WeaponId::Shotgun);
        w.ammo_in_mag = 3;
        assert!(w.request_reload());
        assert!(w.tick(3.0, false));
        assert_eq!(w.ammo_in_mag, 8);
        assert_eq!(w.reserve, 35);
    }

    #[test]
    fn test_reload_rejections() {
        let mut w = WeaponState::new(WeaponId::Ak);
        assert!(!w.request_reload(), "full magazine");
        w.ammo_in_mag = 29;
        assert!(w.request_reload());
        assert!(!w.request_reload(), "already reloading");
        w.switch_weapon(WeaponId::Ak);
        w.ammo_in_mag = 1;
        w.reserve = 0;
        assert!(!w.request_reload(), "no reserve");
    }

    #[test]
    fn test_switch_refills_and_cancels_reload() {
        let mut w = WeaponState::new(WeaponId::Ak);
        w.ammo_in_mag = 0;
        w.try_fire();
        assert!(w.reloading);
        w.switch_weapon(WeaponId::Shotgun);
        assert!(!w.reloading);
        assert_eq!(w.ammo_in_mag, 8);
        assert_eq!(w.reserve, 40);
        assert_eq!(w.cooldown, 0.0);
    }

    #[test]
    fn test_cooldown_gates_fire() {
        let mut w = WeaponState::new(WeaponId::Magnum);
        assert_eq!(w.try_fire(), FireOutcome::Fired);
        assert_eq!(w.try_fire(), FireOutcome::Blocked);
        w.tick(0.2, false);
        assert_eq!(w.try_fire(), FireOutcome::Blocked);
        w.tick(0.06, false);
        assert_eq!(w.try_fire(), FireOutcome::Fired);
        assert_eq!(w.ammo_in_mag, 4);
    }

    // --- Weapon through the engine ---

    fn armed_engine(weapon: WeaponId) -> SimulationEngine {
        let mut engine = SimulationEngine::with_arena(
            SimConfig {
                start_weapon: weapon,
                ..SimConfig::default()
            },
            open_arena(),
        );
        engine.activate_empty();
        engine
    }

    #[test]
    fn test_ak_three_second_burst() {
        let mut engine = armed_engine(WeaponId::Ak);
        engine.queue_command(PlayerCommand::TriggerDown);

        let mut shots = 0;
        for _ in 0..180 {
            let snap = engine.tick(DT);
            shots += count_events(&snap, is_fired);
        }

        assert_eq!(shots, 30);
        assert_eq!(engine.weapon().ammo_in_mag, 0);
        assert!(engine.weapon().reloading, "auto reload should be running at t = 3 s");
        assert!(engine.weapon().reload_remaining > 0.0);
    }

    #[test]
    fn test_auto_fire_average_interval() {
        let mut engine = armed_engine(WeaponId::Ak);
        engine.queue_command(PlayerCommand::TriggerDown);

        let mut shot_ticks = Vec::new();
        for tick in 0..180u32 {
            let snap = engine.tick(DT);
            if count_events(&snap, is_fired) > 0 {
                shot_ticks.push(tick);
            }
        }
        assert_eq!(shot_ticks.len(), 30);
        let span = (shot_ticks[29] - shot_ticks[0]) as f32 * DT;
        let average = span / 29.0;
        let expected = weapon_def(WeaponId::Ak).seconds_per_shot();
        assert!(
            (average - expected).abs() < DT / 29.0 + 1e-4,
            "average {average}, expected {expected}"
        );
    }

    #[test]
    fn test_semi_fires_once_per_pull() {
        let mut engine = armed_engine(WeaponId::Magnum);
        engine.queue_command(PlayerCommand::TriggerDown);
        let mut shots = 0;
        for _ in 0..120 {
            shots += count_events(&engine.tick(DT), is_fired);
        }
        assert_eq!(shots, 1, "holding a semi trigger fires once");

        engine.queue_commands([PlayerCommand::TriggerUp, PlayerCommand::TriggerDown]);
        shots += count_events(&engine.tick(DT), is_fired);
        assert_eq!(shots, 2);
        assert_eq!(engine.weapon().ammo_in_mag, 4);
    }

    #[test]
    fn test_hud_counts_kills() {
        let mut engine = armed_engine(WeaponId::Magnum);
        let profile = EnemyProfile {
            hp: 3,
            ..minion_profile(1)
        };
        let enemy = engine.spawn_test_enemy(&profile, Vec3::new(0.0, 0.0, 20.0));
        assert_eq!(engine.tick(DT).hud.kills, 0);

        engine.queue_command(PlayerCommand::TriggerDown);
        let snap = engine.tick(DT);
        assert!(!engine.world().contains(enemy));
        assert_eq!(snap.hud.kills, 1);
        assert_eq!(snap.hud.enemy_count, 0);
    }

    #[test]
    fn test_unknown_slot_is_noop() {
        let mut engine = armed_engine(WeaponId::Magnum);
        engine.queue_command(PlayerCommand::TriggerDown);
        engine.tick(DT);
        assert_eq!(engine.weapon().ammo_in_mag, 5);

        engine.queue_command(PlayerCommand::SelectWeapon { slot: 7 });
        let snap = engine.tick(DT);
        assert_eq!(engine.weapon().id, WeaponId::Magnum);
        assert_eq!(engine.weapon().ammo_in_mag, 5);
        assert_eq!(
            count_events(&snap, |e| matches!(e, PresentationEvent::WeaponSwitched { .. })),
            0
        );

        engine.queue_command(PlayerCommand::SelectWeapon { slot: 3 });
        let snap = engine.tick(DT);
        assert_eq!(engine.weapon().id, WeaponId::Shotgun);
        assert_eq!(snap.hud.weapon_name, "SG Shotgun");
        assert_eq!(snap.hud.ammo_in_mag, 8);
    }

    #[test]
    fn test_manual_reload_command() {
        let mut engine = armed_engine(WeaponId::Ak);
        engine.weapon_mut().ammo_in_mag = 12;
        engine.queue_command(PlayerCommand::Reload);
        let snap = engine.tick(DT);
        assert!(snap.hud.reloading);
        assert_eq!(
            count_events(&snap, |e| matches!(e, PresentationEvent::ReloadStarted { .. })),
            1
        );

        let mut finished = 0;
        for _ in 0..140 {
            let snap = engine.tick(DT);
            finished += count_events(&snap, |e| {
                matches!(e, PresentationEvent::ReloadFinished { .. })
            });
        }
        assert_eq!(finished, 1);
        assert_eq!(engine.weapon().ammo_in_mag, 30);
        assert_eq!(engine.weapon().reserve, 102);
    }

    // --- Movement ---

    #[test]
    fn test_horizontal_speed_never_exceeds_max() {
        let arena = Arena::standard();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut player = PlayerState::default();
        let mut input = InputState::default();

        for _ in 0..5_000 {
            if rng.gen_bool(0.1) {
                input.keys = MoveKeys {
                    forward: rng.gen(),
                    back: rng.gen(),
                    left: rng.gen(),
                    right: rng.gen(),
                };
                input.sprint = rng.gen();
                input.crouch = rng.gen_bool(0.2);
                player.view.yaw = rng.gen_range(0.0..std::f32::consts::TAU);
            }
            if rng.gen_bool(0.02) {
                player.jump_buffer = JUMP_BUFFER_SECS;
            }
            let dt = rng.gen_range(0.001..MAX_DT);
            movement::run(&mut player, &input, &arena, dt);
            let max = movement::max_speed(&input);
            assert!(
                player.horizontal_speed() <= max + 1e-4,
                "speed {} > {max}",
                player.horizontal_speed()
            );
        }
    }

    #[test]
    fn test_sprint_reaches_sprint_speed() {
        let arena = open_arena();
        let mut player = PlayerState::default();
        let input = InputState {
            keys: MoveKeys {
                forward: true,
                ..MoveKeys::default()
            },
            sprint: true,
            ..InputState::default()
        };
        for _ in 0..60 {
            movement::run(&mut player, &input, &arena, DT);
        }
        assert!((player.horizontal_speed() - SPRINT_SPEED).abs() < 0.5);
        assert!(player.position.z < 40.0, "moved along -Z");
    }

    #[test]
    fn test_friction_stops_player() {
        let arena = open_arena();
        let mut player = PlayerState::default();
        player.velocity = glam::Vec2::new(5.0, 0.0);
        let input = InputState::default();
        for _ in 0..60 {
            movement::run(&mut player, &input, &arena, DT);
        }
        assert!(player.horizontal_speed() < 0.01);
    }

    #[test]
    fn test_jump_from_ground() {
        let arena = open_arena();
        let mut player = PlayerState::default();
        player.jump_buffer = JUMP_BUFFER_SECS;
        movement::run(&mut player, &InputState::default(), &arena, DT);
        assert_eq!(player.vertical_velocity, JUMP_SPEED);
        assert!(!player.grounded);
        assert!(player.position.y > 0.0);
        assert_eq!(player.jump_buffer, 0.0);
    }

    #[test]
    fn test_no_jump_in_midair() {
        let arena = open_arena();
        let mut player = PlayerState::default();
        player.position.y = 3.0;
        player.grounded = false;
        player.jump_buffer = JUMP_BUFFER_SECS;
        movement::run(&mut player, &InputState::default(), &arena, DT);
        assert!(player.vertical_velocity < 0.0);
    }

    #[test]
    fn test_coyote_jump_after_leaving_ground() {
        let arena = open_arena();
        let mut player = PlayerState::default();
        // Just stepped off something: above ground, still flagged grounded.
        player.position.y = 0.5;
        movement::run(&mut player, &InputState::default(), &arena, DT);
        assert!(!player.grounded);
        assert!(player.coyote > 0.0);

        player.jump_buffer = JUMP_BUFFER_SECS;
        movement::run(&mut player, &InputState::default(), &arena, DT);
        assert_eq!(player.vertical_velocity, JUMP_SPEED);
        assert_eq!(player.coyote, 0.0);
    }

    #[test]
    fn test_coyote_window_expires() {
        let arena = open_arena();
        let mut player = PlayerState::default();
        player.position.y = 5.0;
        for _ in 0..10 {
            movement::run(&mut player, &InputState::default(), &arena, DT);
        }
        assert_eq!(player.coyote, 0.0);
        player.jump_buffer = JUMP_BUFFER_SECS;
        movement::run(&mut player, &InputState::default(), &arena, DT);
        assert!(player.vertical_velocity < 0.0);
    }

    #[test]
    fn test_buffered_jump_fires_on_landing() {
        let arena = open_arena();
        let mut player = PlayerState::default();
        player.position.y = 0.05;
        player.vertical_velocity = -1.0;
        player.grounded = false;
        player.jump_buffer = JUMP_BUFFER_SECS;

        let mut jumped = false;
        for _ in 0..6 {
            movement::run(&mut player, &InputState::default(), &arena, DT);
            if player.vertical_velocity == JUMP_SPEED {
                jumped = true;
                break;
            }
        }
        assert!(jumped, "press just before landing should jump");
    }

    #[test]
    fn test_expired_buffer_does_not_jump() {
        let arena = open_arena();
        let mut player = PlayerState::default();
        player.position.y = 5.0;
        player.grounded = false;
        player.jump_buffer = JUMP_BUFFER_SECS;
        let mut jumped = false;
        for _ in 0..120 {
            movement::run(&mut player, &InputState::default(), &arena, DT);
            jumped |= player.vertical_velocity == JUMP_SPEED;
        }
        assert!(!jumped);
        assert!(player.grounded);
    }

    #[test]
    fn test_cover_blocks_movement() {
        let mut arena = open_arena();
        arena.add_box(0.0, 30.0, 4.0, 3.0, 4.0);
        let mut player = PlayerState::default();
        let input = InputState {
            keys: MoveKeys {
                forward: true,
                ..MoveKeys::default()
            },
            sprint: true,
            ..InputState::default()
        };
        for _ in 0..240 {
            movement::run(&mut player, &input, &arena, DT);
        }
        assert!(player.position.z > 32.0 + PLAYER_RADIUS - 1e-3);
        assert_eq!(player.velocity.y, 0.0);
    }

    #[test]
    fn test_player_clamped_to_map() {
        let arena = open_arena();
        let mut player = PlayerState::default();
        player.position.x = MAP_HALF - 0.5;
        let input = InputState {
            keys: MoveKeys {
                right: true,
                ..MoveKeys::default()
            },
            ..InputState::default()
        };
        for _ in 0..120 {
            movement::run(&mut player, &input, &arena, DT);
        }
        assert_eq!(player.position.x, MAP_HALF);
    }

    #[test]
    fn test_crouch_and_ads_interpolate() {
        let arena = open_arena();
        let mut player = PlayerState::default();
        let input = InputState {
            crouch: true,
            aim: true,
            ..InputState::default()
        };
        movement::run(&mut player, &input, &arena, DT);
        assert!(player.eye_height < EYE_STAND && player.eye_height > EYE_CROUCH);
        assert!(player.fov < BASE_FOV && player.fov > ADS_FOV);
        for _ in 0..60 {
            movement::run(&mut player, &input, &arena, DT);
        }
        assert!((player.eye_height - EYE_CROUCH).abs() < 0.01);
        assert!((player.fov - ADS_FOV).abs() < 0.1);
        assert_eq!(player.stance, Stance::Crouching);
    }

    // --- Hitscan ---

    fn point_blank(damage: i32, pellets: u32) -> WeaponDef {
        WeaponDef {
            damage,
            pellets,
            spread: 0.0,
            ..*weapon_def(WeaponId::Shotgun)
        }
    }

    #[test]
    fn test_pellets_kill_exactly_once() {
        let mut world = hecs::World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut events = Vec::new();
        let profile = EnemyProfile {
            hp: 3,
            ..minion_profile(1)
        };
        let target = world_setup::spawn_enemy(
            &mut world,
            &mut rng,
            Vec3::new(0.0, 0.0, 20.0),
            &profile,
            &mut events,
        );
        events.clear();

        let player = PlayerState::default();
        let report = hitscan::resolve(
            &mut world,
            &open_arena(),
            &mut rng,
            player.eye(),
            &player.view,
            &point_blank(1, 8),
            false,
            &mut events,
        );

        assert_eq!(report.hits, 3, "later pellets see the enemy gone");
        assert_eq!(report.kills, vec![EnemyArchetype::Minion]);
        assert!(!world.contains(target));
        let despawns = events
            .iter()
            .filter(|e| matches!(e, PresentationEvent::EnemyDespawned { .. }))
            .count();
        assert_eq!(despawns, 1);
        let tracers = events
            .iter()
            .filter(|e| matches!(e, PresentationEvent::Tracer { .. }))
            .count();
        assert_eq!(tracers, 8);
    }

    #[test]
    fn test_hp_decreases_monotonically() {
        let mut world = hecs::World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut events = Vec::new();
        let target = world_setup::spawn_enemy(
            &mut world,
            &mut rng,
            Vec3::new(0.0, 0.0, 10.0),
            &boss_profile(1),
            &mut events,
        );
        let player = PlayerState::default();
        let def = point_blank(1, 1);

        let mut last_hp = boss_profile(1).hp;
        for _ in 0..10 {
            hitscan::resolve(
                &mut world,
                &open_arena(),
                &mut rng,
                player.eye(),
                &player.view,
                &def,
                false,
                &mut events,
            );
            let hp = world.get::<&Enemy>(target).map(|e| e.hp).unwrap();
            assert!(hp < last_hp);
            last_hp = hp;
        }
        assert_eq!(last_hp, 50);
    }

    #[test]
    fn test_nearest_enemy_takes_the_hit() {
        let mut world = hecs::World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut events = Vec::new();
        let near = world_setup::spawn_enemy(
            &mut world,
            &mut rng,
            Vec3::new(0.0, 0.0, 25.0),
            &minion_profile(1),
            &mut events,
        );
        let far = world_setup::spawn_enemy(
            &mut world,
            &mut rng,
            Vec3::new(0.0, 0.0, 5.0),
            &minion_profile(1),
            &mut events,
        );
        let player = PlayerState::default();
        hitscan::resolve(
            &mut world,
            &open_arena(),
            &mut rng,
            player.eye(),
            &player.view,
            &point_blank(4, 1),
            false,
            &mut events,
        );
        assert_eq!(world.get::<&Enemy>(near).map(|e| e.hp).unwrap(), 6);
        assert_eq!(world.get::<&Enemy>(far).map(|e| e.hp).unwrap(), 10);
    }

    #[test]
    fn test_ads_tightens_spread() {
        let view = PlayerState::default().view;
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let spread = weapon_def(WeaponId::Shotgun).spread;
        let worst = |rng: &mut ChaCha8Rng, s: f32| {
            (0..200)
                .map(|_| hitscan::pellet_direction(rng, &view, s).dot(view.forward()))
                .fold(1.0f32, f32::min)
        };
        let hip = worst(&mut rng, spread);
        let ads = worst(&mut rng, spread * ADS_SPREAD_FACTOR);
        assert!(ads > hip);
    }

    #[test]
    fn test_boss_killed_by_sixty_damage_starts_interwave() {
        let mut world = hecs::World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut events = Vec::new();
        let arena = open_arena();
        let mut wave = WaveState::default();
        let boss = world_setup::spawn_enemy(
            &mut world,
            &mut rng,
            Vec3::new(0.0, 0.0, 0.0),
            &boss_profile(1),
            &mut events,
        );
        assert_eq!(boss_profile(1).hp, 60);

        let player = PlayerState::default();
        let report = hitscan::resolve(
            &mut world,
            &arena,
            &mut rng,
            player.eye(),
            &player.view,
            &point_blank(60, 1),
            false,
            &mut events,
        );
        assert_eq!(report.kills, vec![EnemyArchetype::Boss]);
        assert!(!world.contains(boss));

        wave_director::run(&mut world, &mut rng, &arena, &mut wave, DT, &mut events);
        assert_eq!(
            wave.phase,
            WavePhase::InterWave {
                remaining_secs: WAVE_DELAY_SECS
            }
        );
        wave_director::run(&mut world, &mut rng, &arena, &mut wave, 1.0, &mut events);
        assert_eq!(
            wave.phase,
            WavePhase::InterWave {
                remaining_secs: WAVE_DELAY_SECS - 1.0
            }
        );
        assert_eq!(wave.wave, 1);
    }

    // --- Enemy AI ---

    fn engine_with_player_at_spawn(arena: Arena) -> SimulationEngine {
        let mut engine = SimulationEngine::with_arena(SimConfig::default(), arena);
        engine.activate_empty();
        engine
    }

    fn gunner_cooldown(engine: &SimulationEngine, entity: Entity) -> f32 {
        engine
            .world()
            .get::<&Gunner>(entity)
            .map(|g| g.cooldown)
            .unwrap()
    }

    #[test]
    fn test_blocked_los_holds_fire_without_reset() {
        let mut arena = open_arena();
        arena.add_box(0.0, 15.0, 20.0, 10.0, 1.0);
        let mut engine = engine_with_player_at_spawn(arena);
        let profile = EnemyProfile {
            shoot_range: 55.0,
            ..minion_profile(1)
        };
        let enemy = engine.spawn_test_enemy(&profile, Vec3::new(0.0, 0.0, -10.0));
        engine.world_mut().get::<&mut Gunner>(enemy).unwrap().cooldown = 0.0;

        let snap = engine.tick(DT);
        assert_eq!(snap.hud.health, PLAYER_MAX_HEALTH);
        assert_eq!(
            count_events(&snap, |e| matches!(
                e,
                PresentationEvent::Damage {
                    target: DamageTarget::Player,
                    ..
                }
            )),
            0
        );
        assert_eq!(gunner_cooldown(&engine, enemy), 0.0);
    }

    #[test]
    fn test_clear_los_shoots_and_resets_cooldown() {
        let mut engine = engine_with_player_at_spawn(open_arena());
        let profile = EnemyProfile {
            shoot_range: 55.0,
            ..minion_profile(1)
        };
        let enemy = engine.spawn_test_enemy(&profile, Vec3::new(0.0, 0.0, -10.0));
        engine.world_mut().get::<&mut Gunner>(enemy).unwrap().cooldown = 0.0;

        let snap = engine.tick(DT);
        assert_eq!(snap.hud.health, PLAYER_MAX_HEALTH - profile.damage);
        assert_eq!(gunner_cooldown(&engine, enemy), profile.shoot_every);
        assert!(snap.events.iter().any(|e| matches!(
            e,
            PresentationEvent::Tracer {
                color: TracerColor::Minion,
                ..
            }
        )));
    }

    #[test]
    fn test_enemy_inside_cover_still_shoots() {
        let mut engine = engine_with_player_at_spawn(Arena::standard());
        let profile = boss_profile(1);
        // Inside the centre cover, within range of the spawn point.
        let boss = engine.spawn_test_enemy(&profile, Vec3::new(0.0, 0.0, -3.0));
        engine.world_mut().get::<&mut Gunner>(boss).unwrap().cooldown = 0.0;

        let snap = engine.tick(DT);
        assert_eq!(snap.hud.health, PLAYER_MAX_HEALTH - profile.damage);
        assert_eq!(gunner_cooldown(&engine, boss), profile.shoot_every);
    }

    #[test]
    fn test_wave_one_boss_engages_on_standard_map() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        engine.queue_command(PlayerCommand::StartGame);

        let mut boss_hit = false;
        for _ in 0..7200 {
            let minions: Vec<Entity> = engine
                .world()
                .query::<&Enemy>()
                .iter()
                .filter(|(_, e)| e.archetype == EnemyArchetype::Minion)
                .map(|(entity, _)| entity)
                .collect();
            let mut scratch = Vec::new();
            for minion in minions {
                world_setup::despawn_enemy(engine.world_mut(), minion, &mut scratch);
            }

            let snap = engine.tick(DT);
            if snap.hud.health < PLAYER_MAX_HEALTH {
                boss_hit = true;
                break;
            }
        }
        assert!(boss_hit, "boss never landed a shot on the player");
    }

    #[test]
    fn test_out_of_range_enemy_advances_and_holds_fire() {
        let mut engine = engine_with_player_at_spawn(open_arena());
        let enemy = engine.spawn_test_enemy(&minion_profile(1), Vec3::new(0.0, 0.0, -60.0));
        engine.world_mut().get::<&mut Gunner>(enemy).unwrap().cooldown = 0.0;
        engine.tick(DT);

        let transform = *engine.world().get::<&Transform>(enemy).unwrap();
        assert!(transform.position.z > -60.0, "advances toward the player");
        assert_eq!(gunner_cooldown(&engine, enemy), 0.0);
        assert_eq!(engine.player().health, PLAYER_MAX_HEALTH);
    }

    #[test]
    fn test_boss_summons_minions() {
        let mut engine = engine_with_player_at_spawn(open_arena());
        let boss = boss_profile(1);
        engine.spawn_test_enemy(&boss, Vec3::from(BOSS_SPAWN));
        let every = boss.summon.map(|s| s.every).unwrap();

        let ticks = ((every + 0.1) / DT) as usize;
        for _ in 0..ticks {
            engine.tick(DT);
        }
        assert_eq!(world_setup::minion_count(engine.world()), SUMMON_COUNT as usize);
        assert_eq!(bosses(&engine).len(), 1);
    }

    #[test]
    fn test_summons_respect_cap() {
        let mut engine = SimulationEngine::with_arena(
            SimConfig {
                max_minions: 1,
                ..SimConfig::default()
            },
            open_arena(),
        );
        engine.activate_empty();
        let boss = boss_profile(1);
        engine.spawn_test_enemy(&boss, Vec3::from(BOSS_SPAWN));
        let every = boss.summon.map(|s| s.every).unwrap();
        let ticks = ((every * 2.0 + 0.1) / DT) as usize;
        for _ in 0..ticks {
            engine.tick(DT);
        }
        assert_eq!(world_setup::minion_count(engine.world()), 1);
    }

    #[test]
    fn test_player_death_ends_game() {
        let mut engine = engine_with_player_at_spawn(open_arena());
        engine.player_mut().health = 4;
        let enemy = engine.spawn_test_enemy(&minion_profile(1), Vec3::new(0.0, 0.0, 5.0));
        engine.world_mut().get::<&mut Gunner>(enemy).unwrap().cooldown = 0.0;

        let snap = engine.tick(DT);
        assert_eq!(snap.phase, GamePhase::GameOver);
        assert_eq!(snap.hud.health, 0);
        assert_eq!(count_events(&snap, |e| *e == PresentationEvent::PlayerDied), 1);
        assert!(!snap.effects.is_empty());

        let frozen_tick = engine.time().tick;
        let mut later = engine.tick(DT);
        for _ in 0..10 {
            later = engine.tick(DT);
        }
        assert_eq!(engine.time().tick, frozen_tick);
        assert!(later.events.is_empty());
        assert!(later.effects.is_empty(), "cosmetics decay after death");
    }

    // --- Waves ---

    #[test]
    fn test_ready_phase_is_frozen() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        let snap = engine.tick(DT);
        assert_eq!(snap.phase, GamePhase::Ready);
        assert_eq!(snap.time.tick, 0);
        assert!(snap.enemies.is_empty());
    }

    #[test]
    fn test_start_game_spawns_wave_one() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        engine.queue_command(PlayerCommand::StartGame);
        let snap = engine.tick(DT);

        assert_eq!(snap.phase, GamePhase::Active);
        assert_eq!(snap.wave.wave, 1);
        assert!(snap.wave.boss_alive);
        assert_eq!(snap.wave.minion_count, 6);
        assert_eq!(snap.hud.enemy_count, 7);
        assert_eq!(
            count_events(&snap, |e| *e == PresentationEvent::WaveStarted { wave: 1 }),
            1
        );
        assert_eq!(
            count_events(&snap, |e| matches!(e, PresentationEvent::EnemySpawned { .. })),
            7
        );
        let boss = snap
            .enemies
            .iter()
            .find(|e| e.archetype == EnemyArchetype::Boss)
            .unwrap();
        assert_eq!(boss.hp, 60);
        assert!((boss.scale - 1.4).abs() < 1e-6);
        for enemy in &snap.enemies {
            assert!(enemy.position.x.abs() <= MAP_HALF && enemy.position.z.abs() <= MAP_HALF);
        }
    }

    #[test]
    fn test_wave_one_respects_minion_cap() {
        let mut engine = SimulationEngine::new(SimConfig {
            max_minions: 3,
            ..SimConfig::default()
        });
        engine.queue_command(PlayerCommand::StartGame);
        let snap = engine.tick(DT);
        assert_eq!(snap.wave.minion_count, 3);
        assert_eq!(snap.wave.minion_cap, 3);
    }

    #[test]
    fn test_waves_advance_one_per_boss_defeat() {
        let mut engine = SimulationEngine::new(SimConfig {
            player_health: 100_000,
            ..SimConfig::default()
        });
        engine.queue_command(PlayerCommand::StartGame);
        engine.tick(DT);

        for expected_wave in 2..=4u32 {
            let boss = bosses(&engine)[0];
            let mut sink = Vec::new();
            assert!(world_setup::despawn_enemy(engine.world_mut(), boss, &mut sink));
            assert!(!world_setup::despawn_enemy(engine.world_mut(), boss, &mut sink));

            let mut defeated = 0;
            let mut started = 0;
            for _ in 0..300 {
                let snap = engine.tick(DT);
                assert!(bosses(&engine).len() <= 1, "never two bosses");
                defeated += count_events(&snap, |e| {
                    matches!(e, PresentationEvent::BossDefeated { .. })
                });
                started += count_events(&snap, |e| {
                    matches!(e, PresentationEvent::WaveStarted { .. })
                });
            }
            assert_eq!(defeated, 1);
            assert_eq!(started, 1);
            assert_eq!(engine.wave().wave, expected_wave);
            assert_eq!(engine.wave().phase, WavePhase::BossActive);
            assert_eq!(bosses(&engine).len(), 1);

            let hp = engine
                .world()
                .get::<&Enemy>(bosses(&engine)[0])
                .map(|e| e.hp)
                .unwrap();
            assert_eq!(hp, boss_profile(expected_wave).hp);
        }
    }

    #[test]
    fn test_interwave_timer_held_while_boss_lives() {
        let mut engine = SimulationEngine::new(SimConfig {
            wave_delay_secs: 2.5,
            ..SimConfig::default()
        });
        engine.queue_command(PlayerCommand::StartGame);
        for _ in 0..120 {
            engine.tick(DT);
        }
        assert_eq!(engine.wave().phase, WavePhase::BossActive);
    }

    // --- Session ---

    #[test]
    fn test_pause_freezes_simulation() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        engine.queue_command(PlayerCommand::StartGame);
        engine.tick(DT);
        engine.queue_command(PlayerCommand::Pause);
        let paused = engine.tick(DT);
        assert_eq!(paused.phase, GamePhase::Paused);

        let tick = engine.time().tick;
        let mut snap = paused.clone();
        for _ in 0..60 {
            snap = engine.tick(DT);
        }
        assert_eq!(engine.time().tick, tick);
        for (a, b) in paused.enemies.iter().zip(&snap.enemies) {
            assert_eq!(a.position, b.position);
        }

        engine.queue_command(PlayerCommand::Resume);
        let resumed = engine.tick(DT);
        assert_eq!(resumed.phase, GamePhase::Active);
        assert_eq!(engine.time().tick, tick + 1);
    }

    #[test]
    fn test_edge_commands_ignored_before_start() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        engine.queue_commands([
            PlayerCommand::TriggerDown,
            PlayerCommand::SelectWeapon { slot: 2 },
            PlayerCommand::Jump,
        ]);
        let snap = engine.tick(DT);
        assert!(snap.events.is_empty());
        assert_eq!(engine.weapon().id, WeaponId::Ak);
        assert_eq!(engine.player().jump_buffer, 0.0);
    }

    #[test]
    fn test_dt_is_clamped() {
        let mut engine = engine_with_player_at_spawn(open_arena());
        engine.tick(1.0);
        assert!((engine.time().elapsed_secs - MAX_DT as f64).abs() < 1e-6);
        engine.tick(f32::NAN);
        assert_eq!(engine.time().tick, 2);
        assert!((engine.time().elapsed_secs - MAX_DT as f64).abs() < 1e-6);
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut engine = engine_with_player_at_spawn(open_arena());
        engine.player_mut().health = 1;
        let enemy = engine.spawn_test_enemy(&minion_profile(1), Vec3::new(0.0, 0.0, 5.0));
        engine.world_mut().get::<&mut Gunner>(enemy).unwrap().cooldown = 0.0;
        engine.tick(DT);
        assert_eq!(engine.phase(), GamePhase::GameOver);

        engine.queue_command(PlayerCommand::StartGame);
        let snap = engine.tick(DT);
        assert_eq!(snap.phase, GamePhase::Active);
        assert_eq!(snap.hud.health, PLAYER_MAX_HEALTH);
        assert_eq!(snap.wave.wave, 1);
        assert!(!engine.world().contains(enemy));
    }

    fn scripted_run(seed: u64) -> Vec<String> {
        let mut engine = SimulationEngine::new(SimConfig {
            seed,
            ..SimConfig::default()
        });
        let script: Vec<(usize, PlayerCommand)> = vec![
            (0, PlayerCommand::StartGame),
            (
                5,
                PlayerCommand::SetMoveKeys {
                    keys: MoveKeys {
                        forward: true,
                        ..MoveKeys::default()
                    },
                },
            ),
            (10, PlayerCommand::TriggerDown),
            (40, PlayerCommand::Look { yaw: 0.2, pitch: 0.05 }),
            (70, PlayerCommand::TriggerUp),
            (80, PlayerCommand::SelectWeapon { slot: 3 }),
            (90, PlayerCommand::TriggerDown),
            (95, PlayerCommand::Jump),
        ];

        (0..240)
            .map(|tick| {
                for (_, cmd) in script.iter().filter(|(at, _)| *at == tick) {
                    engine.queue_command(cmd.clone());
                }
                serde_json::to_string(&engine.tick(DT)).unwrap()
            })
            .collect()
    }

    #[test]
    fn test_determinism_same_seed() {
        assert_eq!(scripted_run(1234), scripted_run(1234));
    }

    #[test]
    fn test_different_seeds_diverge() {
        assert_ne!(scripted_run(1), scripted_run(2));
    }
}
