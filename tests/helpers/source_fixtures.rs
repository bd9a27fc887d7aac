//! Common model text fixtures for tests.

/// Header lines every minimal model needs
pub const HEADER: &str = "domain Elevator Management\nsubsystem Transport, TRANS\n";

/// A complete subsystem touching every section and tag form
pub const ELEVATOR_TRANSPORT: &str = r#"// Elevator transport subsystem
metadata
Title : Elevator Transport
Author : Leon Starr
Copyright notice > MIT
Organization logo > mint_small

domain Elevator Management
subsystem Transport, TRANS

class Bank, BANK
attributes
Name : Bank Name {I}
Average cabin speed : Speed
--

class Shaft, SHAFT
attributes
ID : Nominal {I}
Bank {R1}
In service : Boolean
--

class Cabin, CAB
attributes
Shaft {I, R2 > Shaft}
Travel direction : Direction
!Scratch : Count
methods
Ping()
Go to floor(floor)
--

class Floor, FLR {import:BLDG}
attributes
Name : Floor Name {I}
Height : Distance {I2}
--

class Accessible Floor, AF
attributes
Floor {I, R3 > Floor}
Bank {I, R3 > Bank}
--

class Door, DOOR
attributes
Cabin {I, UR6c.Shaft}
Is open : Boolean
--

class Level Door, LDOOR
attributes
Cabin {I, R6/is a}
Floor : Floor Name {I, I2c}
--

class Cabin Door, CDOOR
attributes
Cabin {I, R6}
--

relationships
R1
is managed by, 1 Bank
manages, M Shaft

R2
moves within, 1 Shaft
is traversed by, 1 Cabin

R3
is accessible to, M Bank
can access, M Floor
1 Accessible Floor

R6
Door +
Level Door
Cabin Door
--
"#;

/// Same metadata key twice, last one a resource citation
pub const DUPLICATE_METADATA: &str = r#"metadata
Author : Leon Starr
Author > MIT

domain Elevator Management
subsystem Transport
"#;
