use super::*;

// ═══════════════════════════════════════════════════════════════════════════
// Skipped lines
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_blank_and_comment_lines() {
    assert_eq!(parse_line(1, ""), Ok(None));
    assert_eq!(parse_line(2, "   "), Ok(None));
    assert_eq!(parse_line(3, "# login Bob"), Ok(None));
}

// ═══════════════════════════════════════════════════════════════════════════
// Commands
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_tick_with_and_without_position() {
    assert_eq!(
        parse_line(1, "tick 42"),
        Ok(Some(ScriptCommand::Tick {
            tick: 42,
            position: None
        }))
    );
    assert_eq!(
        parse_line(1, "tick 43 3040 4830 0"),
        Ok(Some(ScriptCommand::Tick {
            tick: 43,
            position: Some(WorldPoint::new(3040, 4830, 0)),
        }))
    );
}

#[test]
fn test_quoted_names() {
    assert_eq!(
        parse_line(1, "login \"Local Player\" 3094 3491 0"),
        Ok(Some(ScriptCommand::Login {
            name: "Local Player".to_string(),
            position: Some(WorldPoint::new(3094, 3491, 0)),
        }))
    );
    assert_eq!(
        parse_line(1, "chat \"Your PK skull will now last for 10 minutes.\""),
        Ok(Some(ScriptCommand::Chat {
            message: "Your PK skull will now last for 10 minutes.".to_string(),
        }))
    );
}

#[test]
fn test_anim_with_weapon() {
    assert_eq!(
        parse_line(1, "anim Pker 7514 3095 3491 0 13652 \"Dragon claws\""),
        Ok(Some(ScriptCommand::Anim {
            actor: "Pker".to_string(),
            animation: 7514,
            position: WorldPoint::new(3095, 3491, 0),
            weapon: Some(WeaponRef::new(13652, "Dragon claws")),
        }))
    );
}

#[test]
fn test_anim_without_weapon() {
    let Ok(Some(ScriptCommand::Anim { weapon, .. })) = parse_line(1, "anim Mage 1979 3100 3491 0")
    else {
        panic!("expected anim");
    };
    assert_eq!(weapon, None);
}

#[test]
fn test_equip_and_unequip() {
    assert_eq!(
        parse_line(1, "equip 2 22557"),
        Ok(Some(ScriptCommand::Equip {
            slot: 2,
            item: Some(22557)
        }))
    );
    assert_eq!(
        parse_line(1, "equip 2 none"),
        Ok(Some(ScriptCommand::Equip { slot: 2, item: None }))
    );
}

#[test]
fn test_despawn_logout_flag() {
    assert_eq!(
        parse_line(1, "despawn Bob logout"),
        Ok(Some(ScriptCommand::Despawn {
            actor: "Bob".to_string(),
            logged_out: true,
        }))
    );
    assert_eq!(
        parse_line(1, "despawn Bob"),
        Ok(Some(ScriptCommand::Despawn {
            actor: "Bob".to_string(),
            logged_out: false,
        }))
    );
}

#[test]
fn test_interact_without_target() {
    assert_eq!(
        parse_line(1, "interact Pker"),
        Ok(Some(ScriptCommand::Interact {
            source: "Pker".to_string(),
            target: None,
        }))
    );
}

#[test]
fn test_bare_commands() {
    assert_eq!(parse_line(1, "teleport"), Ok(Some(ScriptCommand::Teleport)));
    assert_eq!(parse_line(1, "hit-in"), Ok(Some(ScriptCommand::HitIn)));
    assert_eq!(parse_line(1, "logout"), Ok(Some(ScriptCommand::Logout)));
    assert_eq!(parse_line(1, "hop"), Ok(Some(ScriptCommand::Hop)));
    assert_eq!(parse_line(1, "died"), Ok(Some(ScriptCommand::Died)));
}

// ═══════════════════════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_unknown_command() {
    assert_eq!(
        parse_line(7, "dance"),
        Err(ScriptError::UnknownCommand {
            line: 7,
            command: "dance".to_string(),
        })
    );
}

#[test]
fn test_bad_quoting() {
    assert_eq!(
        parse_line(3, "chat \"unterminated"),
        Err(ScriptError::Quoting { line: 3 })
    );
}

#[test]
fn test_missing_and_invalid_arguments() {
    assert!(matches!(
        parse_line(4, "hit-out"),
        Err(ScriptError::MissingArgument {
            line: 4,
            command: "hit-out",
            ..
        })
    ));
    assert!(matches!(
        parse_line(5, "anim Pker 7514"),
        Err(ScriptError::MissingArgument { line: 5, .. })
    ));
    assert_eq!(
        parse_line(6, "tick soon"),
        Err(ScriptError::InvalidNumber {
            line: 6,
            value: "soon".to_string(),
        })
    );
}
