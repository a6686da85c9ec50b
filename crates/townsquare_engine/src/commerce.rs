//! Shops: list, buy, sell, and value.

use townsquare_foundation::{Error, ErrorKind, ItemId, Result};
use townsquare_world::Item;
use tracing::debug;

use crate::game::Game;
use crate::report::{Purchase, Sale, ShopListing, Valuation};

const LIST_HINT: &str = "Type \"list\" or \"list full\" to see a list of items for sale.";
const INVENTORY_HINT: &str = "Type \"inventory\" or \"inv\" to see your inventory.";

impl Game {
    fn shop_wares(&self) -> Result<&[ItemId]> {
        self.world
            .current_room()?
            .shop
            .as_deref()
            .ok_or_else(|| Error::new(ErrorKind::NotAShop))
    }

    /// The current shop's wares, with long descriptions when `full`.
    ///
    /// # Errors
    ///
    /// Returns `NotAShop` outside a shop.
    pub fn list(&self, full: bool) -> Result<ShopListing> {
        let entries = self
            .shop_wares()?
            .iter()
            .map(|id| {
                let detail = if full {
                    Some(self.world.items().require(id)?.long_desc.clone())
                } else {
                    None
                };
                Ok((id.clone(), detail))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(ShopListing { entries })
    }

    /// Buys the first ware matching `fragment`.
    ///
    /// # Errors
    ///
    /// - `NotAShop` outside a shop.
    /// - `MissingArgument` for an empty fragment.
    /// - `NotSold` if no ware matches.
    /// - `InsufficientFunds` if the player cannot pay; nothing changes.
    pub fn buy(&mut self, fragment: &str) -> Result<Purchase> {
        let wares = self.shop_wares()?;
        let fragment = fragment.trim().to_lowercase();
        if fragment.is_empty() {
            return Err(Error::missing_argument("Buy", LIST_HINT));
        }

        let item = self
            .world
            .lexicon()
            .first_match(&fragment, wares)
            .ok_or_else(|| Error::new(ErrorKind::NotSold(fragment.clone())))?;
        let cost = item.cost.ok_or_else(|| {
            Error::new(ErrorKind::Internal(format!("shop ware '{}' has no cost", item.id)))
        })?;
        let id = item.id.clone();
        let short_desc = item.short_desc.clone();

        let before = self.world.player().money;
        if before < cost {
            return Err(Error::new(ErrorKind::InsufficientFunds {
                item: short_desc,
                cost,
                available: before,
            }));
        }

        self.world.player_mut().money = before - cost;
        self.world.inventory_mut().add(id.clone());
        debug!(item = %id, cost, remaining = before - cost, "item bought");

        Ok(Purchase {
            item: id,
            short_desc,
            cost,
            before,
            remaining: before - cost,
        })
    }

    /// Sells one carried item matching `fragment`.
    ///
    /// # Errors
    ///
    /// - `NotAShop` outside a shop.
    /// - `MissingArgument` for an empty fragment.
    /// - `NotCarried` if nothing carried matches.
    /// - `NotSellable` if the shop will not buy it.
    pub fn sell(&mut self, fragment: &str) -> Result<Sale> {
        let (id, short_desc, price) = {
            let item = self.appraise("Sell", fragment)?;
            (item.id.clone(), item.short_desc.clone(), item.sell.unwrap_or(0))
        };

        self.world.inventory_mut().remove_one(&id);
        self.world.player_mut().money += price;
        debug!(item = %id, price, "item sold");

        Ok(Sale {
            item: id,
            short_desc,
            price,
        })
    }

    /// What the shop would pay for one carried item matching `fragment`.
    ///
    /// # Errors
    ///
    /// Same as [`Game::sell`]; never changes state.
    pub fn value(&self, fragment: &str) -> Result<Valuation> {
        let item = self.appraise("Value", fragment)?;
        Ok(Valuation {
            item: item.id.clone(),
            value: item.sell.unwrap_or(0),
        })
    }

    fn appraise(&self, verb: &str, fragment: &str) -> Result<&Item> {
        self.shop_wares()?;
        let fragment = fragment.trim().to_lowercase();
        if fragment.is_empty() {
            return Err(Error::missing_argument(verb, INVENTORY_HINT));
        }

        let item = self
            .world
            .lexicon()
            .first_match(&fragment, self.world.inventory())
            .ok_or_else(|| Error::not_carried(&fragment))?;
        if !item.sellable {
            return Err(Error::new(ErrorKind::NotSellable(item.short_desc.clone())));
        }
        Ok(item)
    }
}
