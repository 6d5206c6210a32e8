//! Ability resolution: cooldown gate, damage, effect attachment.
//!
//! Resolution is split in two halves so that self-targeted abilities work with
//! a single `&mut Combatant`:
//!
//! 1. [`prepare_strike`] validates the index and cooldown, then commits the
//!    attacker side (cooldown). On error nothing has been mutated.
//! 2. [`land_strike`] applies damage and the effect copy to the target.

use crate::combatant::Combatant;
use crate::error::ActionRejection;

use super::damage::calculate_damage;
use super::result::{AbilityOutcome, Strike};

/// Uses the attacker's ability at `index` against `target`.
pub fn use_ability(
    attacker: &mut Combatant,
    index: usize,
    target: &mut Combatant,
) -> Result<AbilityOutcome, ActionRejection> {
    let strike = prepare_strike(attacker, index)?;
    Ok(land_strike(target, strike))
}

/// Uses the combatant's ability at `index` against itself.
pub fn use_ability_on_self(
    combatant: &mut Combatant,
    index: usize,
) -> Result<AbilityOutcome, ActionRejection> {
    let strike = prepare_strike(combatant, index)?;
    Ok(land_strike(combatant, strike))
}

pub(crate) fn prepare_strike(
    attacker: &mut Combatant,
    index: usize,
) -> Result<Strike, ActionRejection> {
    let attack = attacker.stats.attack;
    let ability = attacker
        .abilities
        .get_mut(index)
        .ok_or(ActionRejection::InvalidAbilityIndex)?;

    if !ability.is_ready() {
        return Err(ActionRejection::OnCooldown);
    }
    ability.trigger();

    Ok(Strike {
        attacker: attacker.name.clone(),
        ability: ability.name.clone(),
        damage: calculate_damage(ability.damage, attack),
        effect: ability.effect,
    })
}

pub(crate) fn land_strike(target: &mut Combatant, strike: Strike) -> AbilityOutcome {
    let dealt = target.take_hit(strike.damage);

    let mut message = format!(
        "{} used {} on {} for {} damage",
        strike.attacker, strike.ability, target.name, dealt
    );

    if let Some(effect) = strike.effect {
        target.effects.push(effect);
        message.push_str(&format!(
            " and applied {} for {} rounds",
            effect.kind, effect.duration
        ));
    }
    message.push('.');

    AbilityOutcome {
        ability: strike.ability,
        damage: strike.damage,
        dealt,
        effect: strike.effect,
        message,
    }
}
